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

//! Adaptive equal-space CDF sketch engine.
//!
//! A sketch holds a short list of generations, newest first. Each
//! generation pairs a partition of the real line with a hashed counter;
//! queries aggregate the generations under an exponential decay so recent
//! data dominates. Routine updates only touch counters; a rearrangement
//! rebuilds the partition by inverting the CDF of the current density
//! estimate mixed with the buffered samples, so every new bin carries
//! approximately equal mass.
//!
//! With a positive queue capacity the sketch buffers raw samples and
//! defers structural work: queued samples contribute to queries through a
//! decay-matched correction, overflow drains into the counters, and
//! [`Sketch::rearrange`] folds the whole queue into a fresh generation.
//!
//! # Usage
//!
//! ```rust
//! use adasketch::sketch::{Measure, Sketch, SketchConf};
//!
//! # fn main() -> Result<(), adasketch::error::Error> {
//! let conf = SketchConf {
//!     cmap_size: 10,
//!     cmap_start: -5.0,
//!     cmap_end: 5.0,
//!     ..SketchConf::default()
//! };
//! let mut sketch = Sketch::new(conf, Measure::prim())?;
//! sketch.update_with_weight(&1.5, 2.0);
//! assert!(sketch.count(&1.0, &2.0) > 0.0);
//! # Ok(())
//! # }
//! ```

mod conf;
mod measure;
mod sketch;
mod structure;
mod update;

pub use self::conf::SketchConf;
pub use self::measure::Measure;
pub use self::sketch::Sketch;
