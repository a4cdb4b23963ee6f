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

use super::cumulative::CumulativePlot;
use super::piecewise_lookup;
use super::sort_and_check_disjoint;
use crate::range::PrimRange;

/// Piecewise-constant density over disjoint ranges.
///
/// The value of a record is a density, so the probability mass carried by a
/// record is its value times its length. Points outside every record have
/// density zero.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityPlot {
    records: Vec<(PrimRange, f64)>,
}

impl DensityPlot {
    /// Builds a plot from `(range, density)` records, ordering them by
    /// range start.
    ///
    /// # Panics
    ///
    /// Panics if any two records overlap.
    pub fn disjoint(mut records: Vec<(PrimRange, f64)>) -> Self {
        sort_and_check_disjoint(&mut records);
        Self { records }
    }

    /// Builds the plot of a square-kernel smoothing: each `(value, weight)`
    /// point contributes a uniform density of height `weight / window` over
    /// `[value - window/2, value + window/2)`, and overlapping
    /// contributions add.
    ///
    /// Non-finite points and zero weights are discarded.
    ///
    /// # Panics
    ///
    /// Panics if `window` is not strictly positive.
    pub fn square_kernel(points: &[(f64, f64)], window: f64) -> Self {
        assert!(
            window > 0.0 && window.is_finite(),
            "kernel window must be positive and finite, got {window}"
        );
        let mut events: Vec<(f64, f64)> = Vec::with_capacity(points.len() * 2);
        for &(x, w) in points {
            if !x.is_finite() || w == 0.0 {
                continue;
            }
            let height = w / window;
            events.push((x - window / 2.0, height));
            events.push((x + window / 2.0, -height));
        }
        events.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut records = Vec::new();
        let mut height = 0.0f64;
        let mut prev = f64::NAN;
        let mut i = 0;
        while i < events.len() {
            let x = events[i].0;
            if height != 0.0 && prev < x {
                records.push((PrimRange::new(prev, x), height));
            }
            while i < events.len() && events[i].0 == x {
                height += events[i].1;
                i += 1;
            }
            prev = x;
        }
        Self { records }
    }

    /// Returns the ordered records.
    pub fn records(&self) -> &[(PrimRange, f64)] {
        &self.records
    }

    /// Returns true if the plot has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the density at `x`: the value of the record whose range
    /// contains `x`, or zero if none does.
    pub fn interpolation(&self, x: f64) -> f64 {
        piecewise_lookup(&self.records, x)
    }

    /// Returns the total mass under the plot.
    pub fn mass(&self) -> f64 {
        self.records
            .iter()
            .map(|(range, value)| {
                if *value == 0.0 {
                    0.0
                } else {
                    value * range.length()
                }
            })
            .sum()
    }

    /// Returns the plot scaled by `factor`.
    pub fn scale(&self, factor: f64) -> DensityPlot {
        let records = self
            .records
            .iter()
            .map(|&(range, value)| (range, value * factor))
            .collect();
        DensityPlot { records }
    }

    /// Returns the pointwise sum of two plots over the union of their
    /// breakpoints.
    pub fn add(&self, other: &DensityPlot) -> DensityPlot {
        let mut edges: Vec<f64> = Vec::with_capacity((self.records.len() + other.records.len()) * 2);
        for (range, _) in self.records.iter().chain(other.records.iter()) {
            edges.push(range.start());
            edges.push(range.end());
        }
        edges.sort_by(f64::total_cmp);
        edges.dedup();

        let mut records = Vec::new();
        for pair in edges.windows(2) {
            let (start, end) = (pair[0], pair[1]);
            if start >= end {
                continue;
            }
            let middle = PrimRange::new(start, end).middle();
            let value = self.interpolation(middle) + other.interpolation(middle);
            if value != 0.0 {
                records.push((PrimRange::new(start, end), value));
            }
        }
        DensityPlot { records }
    }

    /// Integrates the density left to right into a cumulative plot.
    ///
    /// The cumulative value at each record boundary equals the area up to
    /// that boundary.
    pub fn cumulative(&self) -> CumulativePlot {
        let mut points: Vec<(f64, f64)> = Vec::with_capacity(self.records.len() * 2);
        let mut acc = 0.0;
        for (range, value) in &self.records {
            let area = if *value == 0.0 {
                0.0
            } else {
                value * range.length()
            };
            if points.last().map_or(true, |&(x, _)| x < range.start()) {
                points.push((range.start(), acc));
            }
            acc += area;
            points.push((range.end(), acc));
        }
        CumulativePlot::from_points(points)
    }
}
