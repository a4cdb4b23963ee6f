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

use super::piecewise_lookup;
use super::sort_and_check_disjoint;
use crate::range::PrimRange;

/// Piecewise counts over disjoint ranges.
///
/// Unlike a density plot, the value of a record is the raw count in its
/// range; interpolation performs no division by length, so records may span
/// unbounded ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct CountPlot {
    records: Vec<(PrimRange, f64)>,
}

impl CountPlot {
    /// Builds a plot from `(range, count)` records, ordering them by range
    /// start.
    ///
    /// # Panics
    ///
    /// Panics if any two records overlap.
    pub fn disjoint(mut records: Vec<(PrimRange, f64)>) -> Self {
        sort_and_check_disjoint(&mut records);
        Self { records }
    }

    /// Returns the ordered records.
    pub fn records(&self) -> &[(PrimRange, f64)] {
        &self.records
    }

    /// Returns the count of the record whose range contains `x`, or zero if
    /// none does.
    pub fn interpolation(&self, x: f64) -> f64 {
        piecewise_lookup(&self.records, x)
    }
}
