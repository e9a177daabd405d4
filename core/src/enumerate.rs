//! Range enumerators.
//!
//! The divisor-based scans walk `1..=limit` (or `2..=limit`) in ascending
//! order, so results are sorted and free of duplicates. The exponent scans
//! walk `p = 2..=max_p` and work in `u128`.

use crate::divisors::NumberClass;
use crate::divisors::classify;
use crate::divisors::is_perfect;
use crate::error::ClassifyError;
use crate::error::Result;
use crate::primality::is_prime;

/// Smallest exponent a derived bound is clamped to.
pub const MIN_EXPONENT: u32 = 2;

/// Largest `p` for which `2^(p-1) * (2^p - 1)` fits in a `u128`.
pub const MAX_SUPPORTED_EXPONENT: u32 = 64;

pub fn find_perfect_numbers(limit: u64) -> Vec<u64> {
    let found: Vec<u64> = (2..=limit).filter(|&n| is_perfect(n)).collect();
    tracing::debug!(limit, count = found.len(), "perfect scan finished");
    found
}

pub fn find_deficient_numbers(limit: u64) -> Vec<u64> {
    let found = collect_class(limit, NumberClass::Deficient);
    tracing::debug!(limit, count = found.len(), "deficient scan finished");
    found
}

pub fn find_abundant_numbers(limit: u64) -> Vec<u64> {
    let found = collect_class(limit, NumberClass::Abundant);
    tracing::debug!(limit, count = found.len(), "abundant scan finished");
    found
}

fn collect_class(limit: u64, class: NumberClass) -> Vec<u64> {
    (1..=limit)
        .filter(|&n| classify(n) == Some(class))
        .collect()
}

/// Mersenne primes `2^p - 1` for prime `p` in `2..=max_p`.
///
/// Fails with [`ClassifyError::ExponentOutOfRange`] when `max_p` exceeds
/// [`MAX_SUPPORTED_EXPONENT`].
pub fn find_mersenne_primes(max_p: u32) -> Result<Vec<u128>> {
    let found: Vec<u128> = mersenne_exponents(max_p)?.map(mersenne).collect();
    tracing::debug!(max_p, count = found.len(), "mersenne scan finished");
    Ok(found)
}

/// Even perfect numbers `2^(p-1) * (2^p - 1)` (Euclid–Euler) for every
/// Mersenne exponent `p` in `2..=max_p`.
pub fn generate_even_perfect_numbers(max_p: u32) -> Result<Vec<u128>> {
    let found: Vec<u128> = mersenne_exponents(max_p)?
        .map(|p| (1u128 << (p - 1)) * mersenne(p))
        .collect();
    tracing::debug!(max_p, count = found.len(), "even perfect scan finished");
    Ok(found)
}

/// Exponent bound for a given upper limit: `floor(log2(limit)) - 1`,
/// clamped to at least [`MIN_EXPONENT`].
///
/// Never exceeds 62 for a `u64` limit, so the result is always accepted by
/// the exponent scans.
pub fn exponent_bound(limit: u64) -> u32 {
    limit
        .checked_ilog2()
        .unwrap_or(0)
        .saturating_sub(1)
        .max(MIN_EXPONENT)
}

fn mersenne(p: u32) -> u128 {
    (1u128 << p) - 1
}

fn mersenne_exponents(max_p: u32) -> Result<impl Iterator<Item = u32>> {
    if max_p > MAX_SUPPORTED_EXPONENT {
        return Err(ClassifyError::exponent_out_of_range(max_p));
    }
    Ok((MIN_EXPONENT..=max_p).filter(|&p| is_prime(p) && is_prime(mersenne(p))))
}
