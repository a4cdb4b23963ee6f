// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Adaptive equal-space CDF sketch for streaming density estimation.
//!
//! The sketch ingests a stream of `(value, weight)` updates and estimates
//! the distribution of the stream in sublinear memory, tracking concept
//! drift by periodically rebuilding its partition so that every bin carries
//! approximately equal cumulative mass under the current density estimate.
//!
//! It answers three kinds of queries:
//!
//! * `count(a, b)` — cumulative weight observed over `[a, b]`
//! * `pdf(x)` — probability density at a point
//! * `sum()` — total effective weight
//!
//! # Usage
//!
//! ```rust
//! use adasketch::sketch::{Measure, Sketch, SketchConf};
//!
//! # fn main() -> Result<(), adasketch::error::Error> {
//! let conf = SketchConf {
//!     cmap_size: 8,
//!     cmap_start: 0.0,
//!     cmap_end: 10.0,
//!     ..SketchConf::default()
//! };
//! let mut sketch = Sketch::new(conf, Measure::prim())?;
//! for value in [1.0, 2.0, 2.5, 7.0] {
//!     sketch.update(&value);
//! }
//! assert!((sketch.sum() - 4.0).abs() < 1e-9);
//! let p = sketch.probability(&0.0, &5.0);
//! assert!((0.0..=1.0).contains(&p));
//! sketch.rearrange();
//! # Ok(())
//! # }
//! ```

pub mod cmap;
pub mod common;
pub mod error;
pub mod hcounter;
pub mod plot;
pub mod range;
pub mod sketch;
pub mod smoothing;
