//! Deterministic trial-division primality test.

/// Exact primality test by 6k +/- 1 trial division.
///
/// Accepts any unsigned integer up to `u128`. Candidates are checked in
/// pairs `i`, `i + 2` for `i = 5, 11, 17, ...` while `i * i <= n`.
pub fn is_prime(n: impl Into<u128>) -> bool {
    let n: u128 = n.into();
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut i: u128 = 5;
    while i * i <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}
