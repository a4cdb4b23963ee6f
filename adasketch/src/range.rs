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

//! Half-open intervals over the measured coordinate.

/// Half-open interval `[start, end)` over the primitive coordinate.
///
/// Endpoints may be infinite; the outer bins of a partition use infinite
/// sentinels. Arithmetic on infinities follows IEEE-754.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimRange {
    start: f64,
    end: f64,
}

impl PrimRange {
    /// Creates the interval `[start, end)`.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is NaN or `start > end`.
    pub fn new(start: f64, end: f64) -> Self {
        assert!(
            !start.is_nan() && !end.is_nan(),
            "range endpoints must not be NaN"
        );
        assert!(start <= end, "range start must be <= end, got [{start}, {end})");
        Self { start, end }
    }

    /// Creates the degenerate interval `[value, value)`.
    pub fn point(value: f64) -> Self {
        Self::new(value, value)
    }

    /// Returns the left endpoint.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Returns the right endpoint.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Returns `end - start`.
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Returns true if the interval is degenerate.
    pub fn is_point(&self) -> bool {
        self.start == self.end
    }

    /// Returns the midpoint, or zero when both endpoints are unbounded.
    pub fn middle(&self) -> f64 {
        if self.start.is_infinite() && self.end.is_infinite() {
            return 0.0;
        }
        (self.start + self.end) / 2.0
    }

    /// Returns true if `x` lies in `[start, end)`.
    pub fn contains(&self, x: f64) -> bool {
        self.start <= x && x < self.end
    }

    /// Fraction of `self` covered by the intersection with `other`.
    ///
    /// Returns 0 when either interval is a point or the intervals are
    /// disjoint, and 1 when the intersection spans all of `self`. An
    /// unbounded interval is measured under an arctangent compression of
    /// the axis, so partial fractions stay monotone and continuous in the
    /// query bounds instead of collapsing to 0 or 1.
    pub fn overlap_percent(&self, other: &PrimRange) -> f64 {
        if self.is_point() || other.is_point() {
            return 0.0;
        }
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if start >= end {
            return 0.0;
        }
        if start <= self.start && end >= self.end {
            return 1.0;
        }
        if self.length().is_infinite() {
            return (compress(end) - compress(start))
                / (compress(self.end) - compress(self.start));
        }
        (end - start) / self.length()
    }
}

// Maps the real line onto (-pi/2, pi/2) so unbounded ranges carry a finite
// measure.
fn compress(x: f64) -> f64 {
    x.atan()
}
