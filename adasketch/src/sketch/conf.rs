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

use crate::error::Error;

/// Configuration for a [`Sketch`](super::Sketch).
///
/// Validated once at sketch construction; every violation surfaces as an
/// [`ErrorKind::InvalidConfig`](crate::error::ErrorKind::InvalidConfig)
/// error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SketchConf {
    /// Number of bins per generation partition.
    pub cmap_size: usize,
    /// Number of generations retained. With two or more, the oldest is a
    /// frozen reference that no longer receives counter writes.
    pub cmap_no: usize,
    /// Left bound of the seed range for the initial equal-spaced partition.
    pub cmap_start: f64,
    /// Right bound of the seed range.
    pub cmap_end: f64,
    /// Hash width of the underlying counter.
    pub counter_size: usize,
    /// Number of counter rows.
    pub counter_no: usize,
    /// Capacity of the sample queue; zero disables the adaptive layer.
    pub queue_size: usize,
    /// Lambda of the `exp(-lambda * i)` generation decay; zero weights all
    /// generations uniformly.
    pub decay_factor: f64,
    /// Relative weight of an incoming batch against the current density
    /// when the partition is rebuilt.
    pub mixing_ratio: f64,
    /// Square-kernel width used when the partition is rebuilt.
    pub window: f64,
}

impl Default for SketchConf {
    fn default() -> Self {
        Self {
            cmap_size: 20,
            cmap_no: 2,
            cmap_start: -1000.0,
            cmap_end: 1000.0,
            counter_size: 100,
            counter_no: 2,
            queue_size: 50,
            decay_factor: 2.5,
            mixing_ratio: 1.0,
            window: 10.0,
        }
    }
}

impl SketchConf {
    /// Checks every construction-time constraint.
    pub fn validate(&self) -> Result<(), Error> {
        if self.cmap_size < 2 {
            return Err(Error::invalid_config("cmap_size must be at least 2")
                .with_context("cmap_size", self.cmap_size));
        }
        if self.cmap_no < 1 {
            return Err(Error::invalid_config("cmap_no must be at least 1")
                .with_context("cmap_no", self.cmap_no));
        }
        if !self.cmap_start.is_finite() || !self.cmap_end.is_finite() || self.cmap_start >= self.cmap_end
        {
            return Err(
                Error::invalid_config("cmap seed range must be finite with start < end")
                    .with_context("cmap_start", self.cmap_start)
                    .with_context("cmap_end", self.cmap_end),
            );
        }
        if self.counter_size < 1 {
            return Err(Error::invalid_config("counter_size must be at least 1")
                .with_context("counter_size", self.counter_size));
        }
        if self.counter_no < 1 {
            return Err(Error::invalid_config("counter_no must be at least 1")
                .with_context("counter_no", self.counter_no));
        }
        if !(self.decay_factor >= 0.0) {
            return Err(Error::invalid_config("decay_factor must be non-negative")
                .with_context("decay_factor", self.decay_factor));
        }
        if !(self.mixing_ratio >= 0.0) {
            return Err(Error::invalid_config("mixing_ratio must be non-negative")
                .with_context("mixing_ratio", self.mixing_ratio));
        }
        if !(self.window > 0.0) || !self.window.is_finite() {
            return Err(Error::invalid_config("window must be positive and finite")
                .with_context("window", self.window));
        }
        Ok(())
    }

    /// Number of generations that receive counter writes; the remainder is
    /// the frozen reference suffix.
    pub(crate) fn eff_no(&self) -> usize {
        self.cmap_no.saturating_sub(1).max(1)
    }
}
