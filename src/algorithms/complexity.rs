//! Linear versus quadratic summation.
//!
//! Both functions do real loop work on purpose; neither uses the closed form
//! so that timing them shows O(n) against O(n²) growth.

use std::hint::black_box;

/// Sum of `1..=n` with a single loop. O(n).
pub fn linear_sum(n: u64) -> u128 {
    let mut total: u128 = 0;
    for value in 1..=n {
        total += u128::from(black_box(value));
    }
    total
}

/// For every `v` in `1..=n`, add every integer in `1..v`. O(n²).
///
/// Equals `(n - 1) * n * (n + 1) / 6`.
pub fn nested_sum(n: u64) -> u128 {
    let mut total: u128 = 0;
    for value in 1..=n {
        for inner in 1..value {
            total += u128::from(black_box(inner));
        }
    }
    total
}
