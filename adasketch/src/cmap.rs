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

//! Divider-based partition of the real line.

use crate::range::PrimRange;

/// Partition of the real line into `k` bins induced by `k - 1` sorted
/// dividers.
///
/// Bin `0` is `(-inf, d_1)`, bin `i` is `[d_i, d_{i+1})`, and the last bin
/// is `[d_{k-1}, +inf)`. A value equal to a divider belongs to the bin on
/// the right. Two partitions are equal iff their divider sequences are.
///
/// # Usage
///
/// ```rust
/// # use adasketch::cmap::Cmap;
/// let cmap = Cmap::divider(vec![3.0, 1.0, 2.0]);
/// assert_eq!(cmap.size(), 4);
/// assert_eq!(cmap.apply(2.5), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Cmap {
    dividers: Vec<f64>,
}

impl Cmap {
    /// Builds a partition from the given dividers, sorting them and
    /// removing duplicate values so every bin is a genuine interval.
    /// Non-finite dividers are discarded.
    pub fn divider(dividers: Vec<f64>) -> Self {
        let mut dividers: Vec<f64> = dividers.into_iter().filter(|d| d.is_finite()).collect();
        dividers.sort_by(f64::total_cmp);
        dividers.dedup();
        Self { dividers }
    }

    /// Builds an equal-spaced partition of `[start, end]` into `size` bins.
    ///
    /// # Panics
    ///
    /// Panics if `size < 2` or the bounds are not finite with
    /// `start < end`.
    pub fn equal_space(start: f64, end: f64, size: usize) -> Self {
        assert!(size >= 2, "partition size must be >= 2, got {size}");
        assert!(
            start.is_finite() && end.is_finite() && start < end,
            "seed bounds must be finite with start < end, got [{start}, {end}]"
        );
        let step = (end - start) / size as f64;
        let dividers = (1..size).map(|i| start + step * i as f64).collect();
        Self { dividers }
    }

    /// Returns the index of the bin containing `x`.
    pub fn apply(&self, x: f64) -> usize {
        self.dividers.partition_point(|d| *d <= x)
    }

    /// Returns the number of bins.
    pub fn size(&self) -> usize {
        self.dividers.len() + 1
    }

    /// Returns the range of the bin at `index`, with infinite sentinels for
    /// the outer bins.
    ///
    /// # Panics
    ///
    /// Panics if `index >= size()`.
    pub fn range(&self, index: usize) -> PrimRange {
        assert!(index < self.size(), "bin index {index} out of bounds");
        let start = if index == 0 {
            f64::NEG_INFINITY
        } else {
            self.dividers[index - 1]
        };
        let end = if index == self.dividers.len() {
            f64::INFINITY
        } else {
            self.dividers[index]
        };
        PrimRange::new(start, end)
    }

    /// Returns the ordered list of all bin ranges.
    pub fn bin(&self) -> Vec<PrimRange> {
        (0..self.size()).map(|i| self.range(i)).collect()
    }

    /// Returns the sorted dividers.
    pub fn dividers(&self) -> &[f64] {
        &self.dividers
    }
}
