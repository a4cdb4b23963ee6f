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

//! Hashed counter over partition bins.
//!
//! The counter holds `depth` rows of `width` cells. Each row hashes a bin
//! index into one cell with its own seed and accumulates the update weight
//! there; reads take the minimum across rows, so hash collisions can only
//! overestimate a bin and never lose weight. Total size is independent of
//! the partition size.

use xxhash_rust::xxh64::xxh64;

use crate::common::random::RandomSource;

/// Fixed-width probabilistic counter mapping bin indices to accumulated
/// weights.
#[derive(Debug, Clone, PartialEq)]
pub struct HCounter {
    width: usize,
    rows: Vec<Vec<f64>>,
    seeds: Vec<u64>,
    total: f64,
}

impl HCounter {
    /// Creates an empty counter with `depth` rows of `width` cells, drawing
    /// one hash seed per row from `rng`.
    ///
    /// # Panics
    ///
    /// Panics if `depth` or `width` is zero.
    pub fn new(depth: usize, width: usize, rng: &mut impl RandomSource) -> Self {
        assert!(depth >= 1, "counter depth must be >= 1, got {depth}");
        assert!(width >= 1, "counter width must be >= 1, got {width}");
        let seeds = (0..depth).map(|_| rng.next_u64()).collect();
        Self {
            width,
            rows: vec![vec![0.0; width]; depth],
            seeds,
            total: 0.0,
        }
    }

    fn cell(&self, row: usize, index: usize) -> usize {
        (xxh64(&(index as u64).to_le_bytes(), self.seeds[row]) % self.width as u64) as usize
    }

    /// Adds `weight` to the given bin.
    pub fn update(&mut self, index: usize, weight: f64) {
        for row in 0..self.rows.len() {
            let cell = self.cell(row, index);
            self.rows[row][cell] += weight;
        }
        self.total += weight;
    }

    /// Adds every `(bin, weight)` pair.
    pub fn updates(&mut self, pairs: &[(usize, f64)]) {
        for &(index, weight) in pairs {
            self.update(index, weight);
        }
    }

    /// Returns the estimated accumulated weight of the bin.
    pub fn get(&self, index: usize) -> f64 {
        self.rows
            .iter()
            .enumerate()
            .map(|(row, cells)| cells[self.cell(row, index)])
            .fold(f64::INFINITY, f64::min)
    }

    /// Inclusive range sum over bins `lo..=hi`, up to collision
    /// overestimate.
    pub fn count(&self, lo: usize, hi: usize) -> f64 {
        (lo..=hi).map(|i| self.get(i)).sum()
    }

    /// Returns the exact total weight accumulated by this counter.
    pub fn sum(&self) -> f64 {
        self.total
    }

    /// Returns the number of rows.
    pub fn depth(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of cells per row.
    pub fn width(&self) -> usize {
        self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::random::XorShift64;

    #[test]
    fn test_get_tracks_updates_without_collisions() {
        let mut rng = XorShift64::seeded(7);
        let mut counter = HCounter::new(2, 64, &mut rng);
        counter.update(3, 2.0);
        counter.update(3, 1.5);
        counter.update(5, 4.0);
        assert_eq!(counter.get(3), 3.5);
        assert_eq!(counter.get(5), 4.0);
        assert_eq!(counter.sum(), 7.5);
    }

    #[test]
    fn test_collisions_only_overestimate() {
        let mut rng = XorShift64::seeded(11);
        let mut counter = HCounter::new(2, 2, &mut rng);
        for index in 0..16 {
            counter.update(index, 1.0);
        }
        for index in 0..16 {
            assert!(counter.get(index) >= 1.0);
        }
        assert_eq!(counter.sum(), 16.0);
    }
}
