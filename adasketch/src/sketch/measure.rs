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

use std::fmt;
use std::sync::Arc;

/// Strictly monotone mapping between an element type and the primitive
/// coordinate the engine measures.
///
/// The engine itself only ever applies the forward direction; the inverse
/// is carried so callers can translate primitive results back.
///
/// # Usage
///
/// ```rust
/// # use adasketch::sketch::Measure;
/// let int_measure = Measure::new(|v: &i64| *v as f64, |p| p.round() as i64);
/// assert_eq!(int_measure.to_prim(&3), 3.0);
/// assert_eq!(int_measure.from_prim(3.4), 3);
/// ```
pub struct Measure<A> {
    to: Arc<dyn Fn(&A) -> f64 + Send + Sync>,
    from: Arc<dyn Fn(f64) -> A + Send + Sync>,
}

impl<A> Measure<A> {
    /// Creates a measure from an explicit function pair.
    pub fn new(
        to: impl Fn(&A) -> f64 + Send + Sync + 'static,
        from: impl Fn(f64) -> A + Send + Sync + 'static,
    ) -> Self {
        Self {
            to: Arc::new(to),
            from: Arc::new(from),
        }
    }

    /// Maps an element to its measured coordinate.
    pub fn to_prim(&self, value: &A) -> f64 {
        (self.to)(value)
    }

    /// Maps a measured coordinate back to an element.
    pub fn from_prim(&self, prim: f64) -> A {
        (self.from)(prim)
    }
}

impl Measure<f64> {
    /// Identity measure for plain `f64` streams.
    pub fn prim() -> Self {
        Measure::new(|value: &f64| *value, |prim| prim)
    }
}

impl<A> Clone for Measure<A> {
    fn clone(&self) -> Self {
        Self {
            to: Arc::clone(&self.to),
            from: Arc::clone(&self.from),
        }
    }
}

impl<A> fmt::Debug for Measure<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Measure").finish_non_exhaustive()
    }
}
