//! Number classification over a bounded range.
//!
//! Pure functions for perfect, deficient and abundant numbers (by proper
//! divisor sum), Mersenne primes, and even perfect numbers via the
//! Euclid–Euler correspondence.
//!
//! ## Numeric range
//!
//! Divisor scans take `u64` limits and sum divisors in `u128`. The exponent
//! scans produce `u128` values and accept `max_p` up to
//! [`MAX_SUPPORTED_EXPONENT`]; anything larger is an error rather than a
//! wrapped result.

pub mod analysis;
pub mod divisors;
pub mod enumerate;
pub mod error;
pub mod primality;

pub use analysis::Category;
pub use analysis::HybridAnalysis;
pub use analysis::hybrid_analysis;
pub use divisors::NumberClass;
pub use divisors::classify;
pub use divisors::divisor_sum;
pub use divisors::is_perfect;
pub use divisors::proper_divisors;
pub use enumerate::MAX_SUPPORTED_EXPONENT;
pub use enumerate::MIN_EXPONENT;
pub use enumerate::exponent_bound;
pub use enumerate::find_abundant_numbers;
pub use enumerate::find_deficient_numbers;
pub use enumerate::find_mersenne_primes;
pub use enumerate::find_perfect_numbers;
pub use enumerate::generate_even_perfect_numbers;
pub use error::ClassifyError;
pub use error::Result;
pub use primality::is_prime;
