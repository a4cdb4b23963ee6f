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

use adasketch::cmap::Cmap;

#[test]
fn test_divider_sorts_input() {
    let cmap = Cmap::divider(vec![3.0, 1.0, 2.0]);
    assert_eq!(cmap.dividers(), &[1.0, 2.0, 3.0]);
    assert_eq!(cmap.size(), 4);
    assert_eq!(cmap.apply(2.5), 2);
}

#[test]
fn test_apply_outside_dividers() {
    let cmap = Cmap::divider(vec![1.0, 2.0, 3.0]);
    assert_eq!(cmap.apply(0.5), 0);
    assert_eq!(cmap.apply(9.0), 3);
    assert_eq!(cmap.apply(f64::NEG_INFINITY), 0);
    assert_eq!(cmap.apply(f64::INFINITY), 3);
}

#[test]
fn test_ties_go_right() {
    let cmap = Cmap::divider(vec![1.0, 2.0, 3.0]);
    // each interior divider maps to its 1-based position
    for (position, divider) in cmap.dividers().to_vec().iter().enumerate() {
        assert_eq!(cmap.apply(*divider), position + 1);
    }
}

#[test]
fn test_range_uses_infinite_sentinels() {
    let cmap = Cmap::divider(vec![1.0, 2.0]);
    assert_eq!(cmap.range(0).start(), f64::NEG_INFINITY);
    assert_eq!(cmap.range(0).end(), 1.0);
    assert_eq!(cmap.range(1).start(), 1.0);
    assert_eq!(cmap.range(1).end(), 2.0);
    assert_eq!(cmap.range(2).start(), 2.0);
    assert_eq!(cmap.range(2).end(), f64::INFINITY);
}

#[test]
fn test_bin_lists_every_range_in_order() {
    let cmap = Cmap::divider(vec![1.0, 2.0]);
    let bins = cmap.bin();
    assert_eq!(bins.len(), cmap.size());
    for (index, range) in bins.iter().enumerate() {
        assert_eq!(*range, cmap.range(index));
    }
}

#[test]
fn test_equal_space() {
    let cmap = Cmap::equal_space(0.0, 10.0, 4);
    assert_eq!(cmap.dividers(), &[2.5, 5.0, 7.5]);
    assert_eq!(cmap.size(), 4);
}

#[test]
fn test_divider_removes_duplicates() {
    let cmap = Cmap::divider(vec![1.0, 1.0, 2.0, 2.0, 2.0]);
    assert_eq!(cmap.dividers(), &[1.0, 2.0]);
    assert_eq!(cmap.size(), 3);
    assert!(cmap.bin().iter().all(|range| !range.is_point()));
}

#[test]
fn test_non_finite_dividers_are_discarded() {
    let cmap = Cmap::divider(vec![1.0, f64::NAN, f64::INFINITY, 2.0]);
    assert_eq!(cmap.dividers(), &[1.0, 2.0]);
}

#[test]
fn test_equality_is_divider_equality() {
    assert_eq!(Cmap::divider(vec![2.0, 1.0]), Cmap::divider(vec![1.0, 2.0]));
    assert_ne!(Cmap::divider(vec![1.0, 2.0]), Cmap::divider(vec![1.0, 3.0]));
}

#[test]
#[should_panic(expected = "bin index")]
fn test_range_out_of_bounds_panics() {
    let cmap = Cmap::divider(vec![1.0]);
    let _ = cmap.range(2);
}
