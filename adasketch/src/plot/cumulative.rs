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

/// Monotone nondecreasing piecewise-linear function.
///
/// Interpolation is linear between breakpoints and saturates at both ends:
/// below the first breakpoint the value is the first ordinate (zero for an
/// integrated density), above the last it is the total.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativePlot {
    points: Vec<(f64, f64)>,
}

impl CumulativePlot {
    /// Builds a plot from breakpoints sorted by abscissa. A repeated
    /// abscissa keeps the later ordinate.
    pub(crate) fn from_points(points: Vec<(f64, f64)>) -> Self {
        let mut deduped: Vec<(f64, f64)> = Vec::with_capacity(points.len());
        for (x, y) in points {
            match deduped.last_mut() {
                Some(last) if last.0 == x => last.1 = y,
                _ => deduped.push((x, y)),
            }
        }
        debug_assert!(deduped.windows(2).all(|p| p[0].0 < p[1].0 && p[0].1 <= p[1].1));
        Self { points: deduped }
    }

    /// Returns the breakpoints.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Returns the final ordinate, or zero for an empty plot.
    pub fn total(&self) -> f64 {
        self.points.last().map_or(0.0, |&(_, y)| y)
    }

    /// Returns the value at `x`, linearly interpolated between the
    /// surrounding breakpoints and saturating at both ends.
    pub fn interpolation(&self, x: f64) -> f64 {
        let Some(&(first_x, first_y)) = self.points.first() else {
            return 0.0;
        };
        let &(last_x, last_y) = self.points.last().expect("nonempty");
        if x <= first_x {
            return first_y;
        }
        if x >= last_x {
            return last_y;
        }
        let idx = self.points.partition_point(|&(px, _)| px <= x);
        let (x0, y0) = self.points[idx - 1];
        let (x1, y1) = self.points[idx];
        y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    }

    /// Returns the inverse function, defined on `[0, total]`.
    ///
    /// Coordinates are swapped and flat segments collapse to their first
    /// crossing, so the inverse remains a function.
    pub fn inverse(&self) -> CumulativePlot {
        let mut points: Vec<(f64, f64)> = Vec::with_capacity(self.points.len());
        for &(x, y) in &self.points {
            if points.last().map_or(true, |&(py, _)| y > py) {
                points.push((y, x));
            }
        }
        CumulativePlot { points }
    }
}
