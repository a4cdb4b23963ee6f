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

//! Piecewise plots over disjoint ranges.
//!
//! Three plot variants back the sketch's interpolation machinery:
//!
//! * [`DensityPlot`] — piecewise-constant density; the area under a record
//!   is probability mass.
//! * [`CountPlot`] — piecewise-constant raw counts; the value of a record
//!   is the count in its range, with no division by length.
//! * [`CumulativePlot`] — monotone nondecreasing piecewise-linear function
//!   produced by integrating a density left to right; supports inversion.
//!
//! # Usage
//!
//! ```rust
//! # use adasketch::plot::DensityPlot;
//! # use adasketch::range::PrimRange;
//! let plot = DensityPlot::disjoint(vec![
//!     (PrimRange::new(0.0, 1.0), 0.25),
//!     (PrimRange::new(1.0, 2.0), 0.75),
//! ]);
//! assert_eq!(plot.interpolation(0.5), 0.25);
//! let cdf = plot.cumulative();
//! assert_eq!(cdf.interpolation(2.0), 1.0);
//! assert_eq!(cdf.inverse().interpolation(1.0), 2.0);
//! ```

mod count;
mod cumulative;
mod density;

pub use self::count::CountPlot;
pub use self::cumulative::CumulativePlot;
pub use self::density::DensityPlot;

use crate::range::PrimRange;

pub(crate) fn sort_and_check_disjoint(records: &mut [(PrimRange, f64)]) {
    records.sort_by(|a, b| a.0.start().total_cmp(&b.0.start()));
    for pair in records.windows(2) {
        assert!(
            pair[0].0.end() <= pair[1].0.start(),
            "plot records must not overlap: [{}, {}) and [{}, {})",
            pair[0].0.start(),
            pair[0].0.end(),
            pair[1].0.start(),
            pair[1].0.end()
        );
    }
}

pub(crate) fn piecewise_lookup(records: &[(PrimRange, f64)], x: f64) -> f64 {
    let idx = records.partition_point(|(range, _)| range.start() <= x);
    if idx == 0 {
        return 0.0;
    }
    let (range, value) = &records[idx - 1];
    if range.contains(x) {
        *value
    } else {
        0.0
    }
}
