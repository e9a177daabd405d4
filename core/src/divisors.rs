//! Proper-divisor kernel.
//!
//! Divisors are found by trial division up to `sqrt(n)`, pairing each hit
//! with its cofactor. Nothing is cached between calls.

use serde::Serialize;
use strum_macros::AsRefStr;
use strum_macros::Display;

/// Where a number falls relative to the sum of its proper divisors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NumberClass {
    Deficient,
    Perfect,
    Abundant,
}

/// Proper divisors of `n` (every `d < n` with `n % d == 0`).
///
/// Order is discovery order: `1` first, then each divisor `i <= sqrt(n)`
/// followed by its cofactor `n / i`. A square root is emitted once.
/// Returns an empty vector for `n <= 1`.
pub fn proper_divisors(n: u64) -> Vec<u64> {
    if n < 2 {
        return Vec::new();
    }

    let mut divisors = vec![1];
    let mut i: u64 = 2;
    // u128 product: i * i can exceed u64::MAX near the top of the range.
    while u128::from(i) * u128::from(i) <= u128::from(n) {
        if n % i == 0 {
            divisors.push(i);
            let cofactor = n / i;
            if cofactor != i {
                divisors.push(cofactor);
            }
        }
        i += 1;
    }
    divisors
}

/// Sum of the proper divisors of `n`.
///
/// Widened to `u128` since the sum may exceed `n` (and `u64::MAX`).
pub fn divisor_sum(n: u64) -> u128 {
    proper_divisors(n).into_iter().map(u128::from).sum()
}

pub fn is_perfect(n: u64) -> bool {
    n >= 2 && divisor_sum(n) == u128::from(n)
}

/// Classify `n` as deficient, perfect or abundant.
///
/// `1` has no proper divisors, so it is deficient. `0` is outside the
/// domain and yields `None`.
pub fn classify(n: u64) -> Option<NumberClass> {
    if n == 0 {
        return None;
    }
    let class = match divisor_sum(n).cmp(&u128::from(n)) {
        std::cmp::Ordering::Less => NumberClass::Deficient,
        std::cmp::Ordering::Equal => NumberClass::Perfect,
        std::cmp::Ordering::Greater => NumberClass::Abundant,
    };
    Some(class)
}
