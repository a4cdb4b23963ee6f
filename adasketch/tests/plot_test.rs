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

use adasketch::plot::CountPlot;
use adasketch::plot::DensityPlot;
use adasketch::range::PrimRange;

fn two_step_plot() -> DensityPlot {
    DensityPlot::disjoint(vec![
        (PrimRange::new(1.0, 2.0), 0.75),
        (PrimRange::new(0.0, 1.0), 0.25),
    ])
}

#[test]
fn test_disjoint_orders_records() {
    let plot = two_step_plot();
    assert_eq!(plot.records()[0].0.start(), 0.0);
    assert_eq!(plot.records()[1].0.start(), 1.0);
}

#[test]
#[should_panic(expected = "plot records must not overlap")]
fn test_overlapping_records_panic() {
    let _ = DensityPlot::disjoint(vec![
        (PrimRange::new(0.0, 2.0), 1.0),
        (PrimRange::new(1.0, 3.0), 1.0),
    ]);
}

#[test]
fn test_interpolation_is_piecewise_lookup() {
    let plot = two_step_plot();
    assert_eq!(plot.interpolation(0.5), 0.25);
    assert_eq!(plot.interpolation(1.0), 0.75);
    assert_eq!(plot.interpolation(1.999), 0.75);
    // outside every record
    assert_eq!(plot.interpolation(-0.5), 0.0);
    assert_eq!(plot.interpolation(2.0), 0.0);
}

#[test]
fn test_interpolation_in_gap_is_zero() {
    let plot = DensityPlot::disjoint(vec![
        (PrimRange::new(0.0, 1.0), 1.0),
        (PrimRange::new(2.0, 3.0), 1.0),
    ]);
    assert_eq!(plot.interpolation(1.5), 0.0);
}

#[test]
fn test_mass_and_scale() {
    let plot = two_step_plot();
    assert_eq!(plot.mass(), 1.0);
    assert_eq!(plot.scale(3.0).mass(), 3.0);
    assert_eq!(plot.scale(3.0).interpolation(0.5), 0.75);
}

#[test]
fn test_add_splits_at_union_breakpoints() {
    let left = DensityPlot::disjoint(vec![(PrimRange::new(0.0, 2.0), 1.0)]);
    let right = DensityPlot::disjoint(vec![(PrimRange::new(1.0, 3.0), 2.0)]);
    let sum = left.add(&right);
    assert_eq!(sum.interpolation(0.5), 1.0);
    assert_eq!(sum.interpolation(1.5), 3.0);
    assert_eq!(sum.interpolation(2.5), 2.0);
    assert!((sum.mass() - 6.0).abs() < 1e-12);
}

#[test]
fn test_cumulative_boundaries_and_monotonicity() {
    let plot = two_step_plot();
    let cdf = plot.cumulative();
    assert_eq!(cdf.interpolation(0.0), 0.0);
    assert_eq!(cdf.interpolation(1.0), 0.25);
    assert_eq!(cdf.interpolation(2.0), 1.0);
    assert_eq!(cdf.total(), 1.0);

    let mut previous = f64::NEG_INFINITY;
    for step in 0..40 {
        let x = -1.0 + step as f64 * 0.1;
        let y = cdf.interpolation(x);
        assert!(y >= previous, "cumulative must be nondecreasing");
        previous = y;
    }
}

#[test]
fn test_cumulative_saturates_at_both_ends() {
    let cdf = two_step_plot().cumulative();
    assert_eq!(cdf.interpolation(-100.0), 0.0);
    assert_eq!(cdf.interpolation(100.0), 1.0);
    assert_eq!(cdf.interpolation(f64::NEG_INFINITY), 0.0);
    assert_eq!(cdf.interpolation(f64::INFINITY), 1.0);
}

#[test]
fn test_cumulative_is_flat_across_gaps() {
    let plot = DensityPlot::disjoint(vec![
        (PrimRange::new(0.0, 1.0), 1.0),
        (PrimRange::new(2.0, 3.0), 1.0),
    ]);
    let cdf = plot.cumulative();
    assert_eq!(cdf.interpolation(1.0), 1.0);
    assert_eq!(cdf.interpolation(1.5), 1.0);
    assert_eq!(cdf.interpolation(2.0), 1.0);
    assert_eq!(cdf.interpolation(3.0), 2.0);
}

#[test]
fn test_inverse_round_trips_breakpoints() {
    let cdf = two_step_plot().cumulative();
    let inv = cdf.inverse();
    for &(x, y) in cdf.points() {
        assert!((inv.interpolation(y) - x).abs() < 1e-12);
        assert!((cdf.interpolation(inv.interpolation(y)) - y).abs() < 1e-12);
    }
}

#[test]
fn test_inverse_collapses_flat_segments_to_first_crossing() {
    let plot = DensityPlot::disjoint(vec![
        (PrimRange::new(0.0, 1.0), 1.0),
        (PrimRange::new(2.0, 3.0), 1.0),
    ]);
    let inv = plot.cumulative().inverse();
    assert_eq!(inv.interpolation(1.0), 1.0);
    assert_eq!(inv.interpolation(2.0), 3.0);
}

#[test]
fn test_square_kernel_single_point_mass_round_trip() {
    let plot = DensityPlot::square_kernel(&[(2.0, 3.0)], 1.0);
    assert_eq!(plot.records().len(), 1);
    assert_eq!(plot.records()[0].0.start(), 1.5);
    assert_eq!(plot.records()[0].0.end(), 2.5);
    assert_eq!(plot.interpolation(2.0), 3.0);
    assert!((plot.mass() - 3.0).abs() < 1e-12);
    assert!((plot.cumulative().total() - 3.0).abs() < 1e-12);
}

#[test]
fn test_square_kernel_overlapping_points_add() {
    let plot = DensityPlot::square_kernel(&[(0.0, 1.0), (0.5, 1.0)], 2.0);
    assert_eq!(plot.interpolation(0.25), 1.0);
    assert_eq!(plot.interpolation(-0.75), 0.5);
    assert_eq!(plot.interpolation(1.25), 0.5);
    assert!((plot.mass() - 2.0).abs() < 1e-12);
}

#[test]
fn test_square_kernel_skips_non_finite_points() {
    let plot = DensityPlot::square_kernel(&[(f64::INFINITY, 1.0), (0.0, 1.0)], 1.0);
    assert!((plot.mass() - 1.0).abs() < 1e-12);
}

#[test]
fn test_count_plot_returns_raw_counts() {
    let plot = CountPlot::disjoint(vec![
        (PrimRange::new(0.0, 10.0), 5.0),
        (PrimRange::new(10.0, f64::INFINITY), 2.0),
    ]);
    assert_eq!(plot.interpolation(4.0), 5.0);
    assert_eq!(plot.interpolation(100.0), 2.0);
    assert_eq!(plot.interpolation(-1.0), 0.0);
}
