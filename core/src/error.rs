//! Error types for the classifier.
//!
//! Every kernel operation is total over its input type. The only failure
//! is an exponent so large that `2^(p-1) * (2^p - 1)` would not fit in the
//! `u128` result type; it is reported instead of wrapped.

use thiserror::Error;

use crate::enumerate::MAX_SUPPORTED_EXPONENT;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error(
        "exponent bound {requested} exceeds the supported maximum of {supported} (u128 results)"
    )]
    ExponentOutOfRange { requested: u32, supported: u32 },
}

impl ClassifyError {
    pub(crate) fn exponent_out_of_range(requested: u32) -> Self {
        Self::ExponentOutOfRange {
            requested,
            supported: MAX_SUPPORTED_EXPONENT,
        }
    }
}

/// Result type for classifier operations
pub type Result<T> = std::result::Result<T, ClassifyError>;
