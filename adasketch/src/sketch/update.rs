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

//! Partition rebuild via CDF inversion.

use crate::cmap::Cmap;
use crate::error::Error;
use crate::plot::DensityPlot;

use super::conf::SketchConf;

/// Builds a partition whose bins carry approximately equal cumulative mass
/// under the sketch density mixed with the batch.
///
/// The sketch density is weighted `1 / (mu + 1)` and the square-kernel
/// smoothing of the batch `mu / (mu + 1)`; an empty batch leaves the sketch
/// density as-is. The mixture is integrated, the cumulative inverted, and
/// `cmap_size - 1` dividers are read off at equal mass steps.
///
/// A mixture with zero or non-finite total mass is reported as an error so
/// the caller can retain the prior partition.
pub(crate) fn update_cmap(
    sketch_plot: &DensityPlot,
    ps: &[(f64, f64)],
    conf: &SketchConf,
) -> Result<Cmap, Error> {
    let mixing = conf.mixing_ratio;
    let mixed = if ps.is_empty() {
        sketch_plot.clone()
    } else {
        let batch = DensityPlot::square_kernel(ps, conf.window);
        sketch_plot
            .scale(1.0 / (mixing + 1.0))
            .add(&batch.scale(mixing / (mixing + 1.0)))
    };

    let cdf = mixed.cumulative();
    let total = cdf.interpolation(f64::INFINITY);
    if !total.is_finite() {
        return Err(Error::numeric_overflow("mixed density has non-finite mass")
            .with_context("total", total));
    }
    if total <= 0.0 {
        return Err(Error::degenerate_input(
            "mixed density carries no mass to partition",
        ));
    }

    let inv_cdf = cdf.inverse();
    let unit = total / conf.cmap_size as f64;
    let dividers = (1..conf.cmap_size)
        .map(|i| inv_cdf.interpolation(unit * i as f64))
        .collect();
    Ok(Cmap::divider(dividers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::range::PrimRange;

    fn conf(cmap_size: usize) -> SketchConf {
        SketchConf {
            cmap_size,
            mixing_ratio: 1.0,
            window: 1.0,
            ..SketchConf::default()
        }
    }

    #[test]
    fn test_uniform_density_yields_equal_space_dividers() {
        let plot = DensityPlot::disjoint(vec![(PrimRange::new(0.0, 8.0), 1.0)]);
        let cmap = update_cmap(&plot, &[], &conf(4)).unwrap();
        assert_eq!(cmap.dividers(), &[2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_batch_mass_pulls_dividers() {
        let plot = DensityPlot::disjoint(vec![(PrimRange::new(0.0, 8.0), 1.0)]);
        let uniform = update_cmap(&plot, &[], &conf(4)).unwrap();
        let skewed = update_cmap(&plot, &[(8.0, 8.0)], &conf(4)).unwrap();
        assert!(skewed.dividers()[0] > uniform.dividers()[0]);
    }

    #[test]
    fn test_massless_density_is_rejected() {
        let plot = DensityPlot::disjoint(Vec::new());
        let err = update_cmap(&plot, &[], &conf(4)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateInput);
    }
}
