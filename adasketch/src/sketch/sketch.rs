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

use std::collections::VecDeque;
use std::fmt;

use xxhash_rust::xxh64::xxh64;

use crate::cmap::Cmap;
use crate::common::decay::decay_norm;
use crate::common::decay::decay_rate;
use crate::common::random::XorShift64;
use crate::error::Error;
use crate::hcounter::HCounter;
use crate::plot::CountPlot;
use crate::plot::DensityPlot;
use crate::range::PrimRange;
use crate::smoothing::EqualSpaceSmoothing;
use crate::smoothing::Smoothing;

use super::conf::SketchConf;
use super::measure::Measure;
use super::structure::Structure;
use super::update::update_cmap;

/// Which update path the sketch runs.
///
/// The adaptive kind buffers raw samples newest-first and defers
/// structural work; the base kind forwards every update straight to the
/// counters.
#[derive(Debug, Clone)]
enum SketchKind {
    Base,
    Adaptive { queue: VecDeque<(f64, f64)> },
}

/// Streaming sketch of a univariate distribution under concept drift.
///
/// See the [module level documentation](crate::sketch) for more.
pub struct Sketch<A> {
    // newest first, never empty
    structures: Vec<Structure>,
    kind: SketchKind,
    conf: SketchConf,
    measure: Measure<A>,
    rng: XorShift64,
}

impl<A> Sketch<A> {
    /// Creates an empty sketch.
    ///
    /// The initial generation partitions `[cmap_start, cmap_end]` into
    /// equal-spaced bins. The adaptive queue is enabled iff
    /// `conf.queue_size > 0`.
    pub fn new(conf: SketchConf, measure: Measure<A>) -> Result<Self, Error> {
        Self::with_rng(conf, measure, XorShift64::default())
    }

    /// Creates an empty sketch with an explicit counter-seeding generator,
    /// for reproducible behavior.
    pub fn with_rng(conf: SketchConf, measure: Measure<A>, mut rng: XorShift64) -> Result<Self, Error> {
        conf.validate()?;
        let cmap = Cmap::equal_space(conf.cmap_start, conf.cmap_end, conf.cmap_size);
        let counter = HCounter::new(conf.counter_no, conf.counter_size, &mut rng);
        let kind = if conf.queue_size > 0 {
            SketchKind::Adaptive {
                queue: VecDeque::with_capacity(conf.queue_size),
            }
        } else {
            SketchKind::Base
        };
        Ok(Self {
            structures: vec![Structure::new(cmap, counter)],
            kind,
            conf,
            measure,
            rng,
        })
    }

    /// Returns the configuration the sketch was built with.
    pub fn conf(&self) -> &SketchConf {
        &self.conf
    }

    /// Returns the number of generations currently retained.
    pub fn structure_count(&self) -> usize {
        self.structures.len()
    }

    /// Returns true if the sketch buffers samples in a queue.
    pub fn is_adaptive(&self) -> bool {
        matches!(self.kind, SketchKind::Adaptive { .. })
    }

    /// Returns the number of buffered samples.
    pub fn queue_len(&self) -> usize {
        match &self.kind {
            SketchKind::Base => 0,
            SketchKind::Adaptive { queue } => queue.len(),
        }
    }

    /// Returns the dividers of the newest generation's partition.
    pub fn dividers(&self) -> &[f64] {
        self.structures[0].cmap.dividers()
    }

    /// Returns true if the sketch has seen no weight.
    pub fn is_empty(&self) -> bool {
        self.sum() == 0.0
    }

    /// Updates the sketch with a single value of weight one.
    pub fn update(&mut self, value: &A) {
        self.update_with_weight(value, 1.0);
    }

    /// Updates the sketch with a single weighted value.
    ///
    /// NaN values and non-positive weights are ignored.
    pub fn update_with_weight(&mut self, value: &A, weight: f64) {
        let prim = self.measure.to_prim(value);
        self.prim_update(&[(prim, weight)]);
    }

    /// Updates the sketch with a batch of weighted values.
    pub fn update_batch(&mut self, items: &[(A, f64)]) {
        let ps: Vec<(f64, f64)> = items
            .iter()
            .map(|(value, weight)| (self.measure.to_prim(value), *weight))
            .collect();
        self.prim_update(&ps);
    }

    /// Returns the decayed cumulative weight observed over `[from, to]`.
    pub fn count(&self, from: &A, to: &A) -> f64 {
        let Some((p_from, p_to)) = ordered(
            self.measure.to_prim(from),
            self.measure.to_prim(to),
        ) else {
            return 0.0;
        };
        match &self.kind {
            SketchKind::Base => self.prim_count_for_str(p_from, p_to),
            SketchKind::Adaptive { queue } => {
                self.prim_count_for_str(p_from, p_to)
                    + self.queue_correction() * queue_count(queue, p_from, p_to)
            }
        }
    }

    /// Returns the total effective weight of the sketch.
    pub fn sum(&self) -> f64 {
        match &self.kind {
            SketchKind::Base => self.sum_for_str(),
            SketchKind::Adaptive { queue } => {
                self.sum_for_str() + self.queue_correction() * queue_weight(queue)
            }
        }
    }

    /// Returns `count(from, to) / sum()`, clamped to `[0, 1]`; zero when
    /// the sketch is massless.
    pub fn probability(&self, from: &A, to: &A) -> f64 {
        let sum = self.sum();
        if sum <= 0.0 {
            return 0.0;
        }
        (self.count(from, to) / sum).clamp(0.0, 1.0)
    }

    /// Returns the estimated probability density at `value`.
    ///
    /// A massless sketch falls back to the flat density over the seed
    /// range. A degenerate bin holding mass reports infinite density.
    pub fn pdf(&self, value: &A) -> f64 {
        let prim = self.measure.to_prim(value);
        if prim.is_nan() {
            return 0.0;
        }
        match &self.kind {
            SketchKind::Base => self.pdf_for_str(prim),
            SketchKind::Adaptive { queue } => {
                let str_sum = self.sum_for_str();
                let queue_sum = queue_weight(queue);
                let correction = self.queue_correction();
                let total = str_sum + correction * queue_sum;
                if total <= 0.0 {
                    return self.flat_density().interpolation(prim);
                }
                let mut density = 0.0;
                if str_sum > 0.0 {
                    density += str_sum * self.pdf_for_str(prim);
                }
                if queue_sum > 0.0 {
                    density += correction * queue_sum * self.pdf_for_queue(queue, prim);
                }
                density / total
            }
        }
    }

    /// Rebuilds the partition from the current density estimate mixed with
    /// the buffered samples, then redistributes their mass onto the new
    /// bins and clears the queue.
    ///
    /// Rebuild failures (massless or non-finite mixture) fall back to the
    /// prior partition, so this never fails.
    pub fn rearrange(&mut self) {
        let batch: Vec<(f64, f64)> = match &mut self.kind {
            SketchKind::Base => Vec::new(),
            SketchKind::Adaptive { queue } => queue.drain(..).collect(),
        };
        self.deep_update(&batch);
    }

    /// Returns the newest generation's counts as a density plot, skipping
    /// the unbounded outer bins.
    pub fn density_plot(&self) -> Result<DensityPlot, Error> {
        let Some(newest) = self.structures.first() else {
            return Err(Error::empty_sketch());
        };
        let mut records = Vec::new();
        for (index, range) in newest.cmap.bin().into_iter().enumerate() {
            if !range.length().is_finite() || range.length() == 0.0 {
                continue;
            }
            let count = newest.counter.get(index);
            if count == 0.0 {
                continue;
            }
            records.push((range, count / range.length()));
        }
        Ok(DensityPlot::disjoint(records))
    }

    /// Uniform density over the configured seed range, the sketch's
    /// zero-information fallback.
    pub fn flat_density(&self) -> DensityPlot {
        let range = PrimRange::new(self.conf.cmap_start, self.conf.cmap_end);
        DensityPlot::disjoint(vec![(range, 1.0 / range.length())])
    }

    fn prim_update(&mut self, ps: &[(f64, f64)]) {
        let filtered: Vec<(f64, f64)> = ps
            .iter()
            .copied()
            .filter(|(prim, weight)| !prim.is_nan() && *weight > 0.0)
            .collect();
        if filtered.is_empty() {
            return;
        }
        let forwarded = self.enqueue(&filtered);
        self.narrow_update(&forwarded);
    }

    // Returns the samples bound for the narrow path: everything for a base
    // sketch, the queue overflow for an adaptive one.
    fn enqueue(&mut self, ps: &[(f64, f64)]) -> Vec<(f64, f64)> {
        let capacity = self.conf.queue_size;
        match &mut self.kind {
            SketchKind::Base => ps.to_vec(),
            SketchKind::Adaptive { queue } => {
                for &sample in ps.iter().rev() {
                    queue.push_front(sample);
                }
                let mut evicted = Vec::new();
                while queue.len() > capacity {
                    if let Some(oldest) = queue.pop_back() {
                        evicted.push(oldest);
                    }
                }
                evicted
            }
        }
    }

    fn narrow_update(&mut self, ps: &[(f64, f64)]) {
        if ps.is_empty() {
            return;
        }
        let eff_no = self.conf.eff_no().min(self.structures.len());
        for structure in self.structures.iter_mut().take(eff_no) {
            let pairs: Vec<(usize, f64)> = ps
                .iter()
                .map(|&(prim, weight)| (structure.cmap.apply(prim), weight))
                .collect();
            structure.counter.updates(&pairs);
        }
    }

    fn deep_update(&mut self, ps: &[(f64, f64)]) -> Vec<Structure> {
        let utd_cmap = self
            .density_plot()
            .and_then(|plot| update_cmap(&plot, ps, &self.conf))
            .unwrap_or_else(|_| self.structures[0].cmap.clone());

        let seed = counter_seed(self.sum_for_str(), ps.first().map(|&(prim, _)| prim));
        let mut seed_rng = XorShift64::seeded(seed);
        let counter = HCounter::new(self.conf.counter_no, self.conf.counter_size, &mut seed_rng);

        self.structures.insert(0, Structure::new(utd_cmap.clone(), counter));
        let keep = self.conf.cmap_no.min(self.structures.len());
        let evicted = self.structures.split_off(keep);

        if !ps.is_empty() {
            let total: f64 = ps.iter().map(|(_, weight)| weight).sum();
            let cdf = EqualSpaceSmoothing.smooth(ps).cumulative();
            let mass = cdf.total();
            if total > 0.0 && mass > 0.0 {
                let mut synthetic = Vec::new();
                for range in utd_cmap.bin() {
                    let fraction =
                        (cdf.interpolation(range.end()) - cdf.interpolation(range.start())) / mass;
                    if fraction > 0.0 {
                        synthetic.push((range.middle(), fraction * total));
                    }
                }
                self.narrow_update(&synthetic);
            } else if total > 0.0 {
                // the batch collapsed to a single value; project it raw
                self.narrow_update(ps);
            }
        }
        evicted
    }

    fn sum_for_str(&self) -> f64 {
        let lambda = self.conf.decay_factor;
        let weighted: f64 = self
            .structures
            .iter()
            .enumerate()
            .map(|(i, structure)| decay_rate(lambda, i) * structure.counter.sum())
            .sum();
        weighted / decay_norm(lambda, self.structures.len())
    }

    fn prim_count_for_str(&self, p_from: f64, p_to: f64) -> f64 {
        let lambda = self.conf.decay_factor;
        let weighted: f64 = self
            .structures
            .iter()
            .enumerate()
            .map(|(i, structure)| decay_rate(lambda, i) * single_count(structure, p_from, p_to))
            .sum();
        weighted / decay_norm(lambda, self.structures.len())
    }

    fn pdf_for_str(&self, prim: f64) -> f64 {
        let sum = self.sum_for_str();
        if sum <= 0.0 {
            return self.flat_density().interpolation(prim);
        }
        let cmap = &self.structures[0].cmap;
        let range = cmap.range(cmap.apply(prim));
        let count = self.prim_count_for_str(range.start(), range.end());
        if count <= 0.0 {
            return 0.0;
        }
        if range.is_point() {
            return f64::INFINITY;
        }
        if range.length().is_infinite() {
            return 0.0;
        }
        count / (sum * range.length())
    }

    fn pdf_for_queue(&self, queue: &VecDeque<(f64, f64)>, prim: f64) -> f64 {
        let total = queue_weight(queue);
        if total <= 0.0 {
            return self.flat_density().interpolation(prim);
        }
        let cmap = &self.structures[0].cmap;
        let adim = cmap.apply(prim);
        let lo = adim.saturating_sub(1);
        let hi = (adim + 1).min(cmap.size() - 1);
        let mut records = Vec::with_capacity(hi - lo + 1);
        for index in lo..=hi {
            let count: f64 = queue
                .iter()
                .filter(|(value, _)| cmap.apply(*value) == index)
                .map(|(_, weight)| weight)
                .sum();
            records.push((cmap.range(index), count));
        }
        let local = CountPlot::disjoint(records).interpolation(prim);
        if local <= 0.0 {
            return 0.0;
        }
        let range = cmap.range(adim);
        if range.is_point() {
            return f64::INFINITY;
        }
        if range.length().is_infinite() {
            return 0.0;
        }
        local / (total * range.length())
    }

    // Scales queue contributions to the decay mass of the writable
    // generations once every generation exists; 1 while still growing.
    fn queue_correction(&self) -> f64 {
        if self.structures.len() < self.conf.cmap_no {
            return 1.0;
        }
        let lambda = self.conf.decay_factor;
        decay_norm(lambda, self.conf.eff_no()) / decay_norm(lambda, self.conf.cmap_no)
    }
}

impl<A> Clone for Sketch<A> {
    fn clone(&self) -> Self {
        Self {
            structures: self.structures.clone(),
            kind: self.kind.clone(),
            conf: self.conf,
            measure: self.measure.clone(),
            rng: self.rng,
        }
    }
}

impl<A> fmt::Debug for Sketch<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sketch")
            .field("structures", &self.structures)
            .field("kind", &self.kind)
            .field("conf", &self.conf)
            .finish_non_exhaustive()
    }
}

/// Range count inside one generation: interior bins are summed whole, the
/// two boundary bins contribute in proportion to their overlap with the
/// query.
fn single_count(structure: &Structure, p_from: f64, p_to: f64) -> f64 {
    let cmap = &structure.cmap;
    let counter = &structure.counter;
    let start_bin = cmap.apply(p_from);
    let end_bin = cmap.apply(p_to);

    if start_bin == end_bin {
        let query = PrimRange::new(p_from, p_to);
        return counter.get(start_bin) * cmap.range(start_bin).overlap_percent(&query);
    }

    let interior = if end_bin - start_bin > 1 {
        counter.count(start_bin + 1, end_bin - 1)
    } else {
        0.0
    };
    let start_range = cmap.range(start_bin);
    let end_range = cmap.range(end_bin);
    let head = counter.get(start_bin)
        * start_range.overlap_percent(&PrimRange::new(p_from, start_range.end()));
    let tail = counter.get(end_bin)
        * end_range.overlap_percent(&PrimRange::new(end_range.start(), p_to));
    interior + head + tail
}

fn ordered(a: f64, b: f64) -> Option<(f64, f64)> {
    if a.is_nan() || b.is_nan() {
        return None;
    }
    if a <= b {
        Some((a, b))
    } else {
        Some((b, a))
    }
}

fn queue_weight(queue: &VecDeque<(f64, f64)>) -> f64 {
    queue.iter().map(|(_, weight)| weight).sum()
}

fn queue_count(queue: &VecDeque<(f64, f64)>, p_from: f64, p_to: f64) -> f64 {
    queue
        .iter()
        .filter(|(value, _)| *value >= p_from && *value <= p_to)
        .map(|(_, weight)| weight)
        .sum()
}

/// Deterministic counter seed for a rearrangement, derived from the
/// current effective sum and the head of the incoming batch.
fn counter_seed(sum: f64, head: Option<f64>) -> u64 {
    let mut bytes = [0u8; 16];
    bytes[..8].copy_from_slice(&sum.to_bits().to_le_bytes());
    bytes[8..].copy_from_slice(&head.unwrap_or(0.0).to_bits().to_le_bytes());
    xxh64(&bytes, 0)
}
