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

//! Generation decay weights.
//!
//! The `i`-th oldest generation of a sketch is weighted by `exp(-lambda * i)`
//! when generations are aggregated. The weight is memoized in a thread-local
//! table bounded to [`MEMO_CAPACITY`] entries; on overflow the oldest
//! insertion is dropped. Memoized values are exact, so cross-thread
//! staleness cannot occur.

use std::cell::RefCell;
use std::collections::VecDeque;

const MEMO_CAPACITY: usize = 100;

thread_local! {
    static MEMO: RefCell<VecDeque<((u64, usize), f64)>> =
        RefCell::new(VecDeque::with_capacity(MEMO_CAPACITY));
}

/// Returns `exp(-lambda * i)`, the weight of the `i`-th oldest generation.
pub fn decay_rate(lambda: f64, i: usize) -> f64 {
    let key = (lambda.to_bits(), i);
    MEMO.with(|memo| {
        let mut memo = memo.borrow_mut();
        if let Some(&(_, value)) = memo.iter().find(|(k, _)| *k == key) {
            return value;
        }
        let value = (-lambda * i as f64).exp();
        if memo.len() == MEMO_CAPACITY {
            memo.pop_front();
        }
        memo.push_back((key, value));
        value
    })
}

/// Sum of the first `n` decay weights.
pub fn decay_norm(lambda: f64, n: usize) -> f64 {
    (0..n).map(|i| decay_rate(lambda, i)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_exp_exactly() {
        for lambda in [0.0, 0.5, 1.0, 2.5] {
            for i in 0..8 {
                assert_eq!(decay_rate(lambda, i), (-lambda * i as f64).exp());
                // hit the memo a second time
                assert_eq!(decay_rate(lambda, i), (-lambda * i as f64).exp());
            }
        }
    }

    #[test]
    fn test_zero_lambda_disables_decay() {
        assert_eq!(decay_rate(0.0, 7), 1.0);
        assert_eq!(decay_norm(0.0, 4), 4.0);
    }

    #[test]
    fn test_memo_stays_exact_past_capacity() {
        for i in 0..(MEMO_CAPACITY * 3) {
            let lambda = i as f64 * 0.01;
            assert_eq!(decay_rate(lambda, 1), (-lambda).exp());
        }
        // evicted entries recompute to the same value
        assert_eq!(decay_rate(0.0, 1), 1.0);
    }

    #[test]
    fn test_norm_is_prefix_sum() {
        let lambda = 1.25;
        let expected: f64 = (0..5).map(|i| (-lambda * i as f64).exp()).sum();
        assert!((decay_norm(lambda, 5) - expected).abs() < 1e-15);
    }
}
