//! Bill split error types.

use thiserror::Error;

/// Errors rejecting an invalid bill input.
///
/// All variants are raised before any computation; there is no partial
/// result path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SplitError {
    /// Total must be strictly positive.
    #[error("Total amount must be positive")]
    NonPositiveTotal,

    /// At least one person is required.
    #[error("Number of people must be at least 1")]
    NoParticipants,

    /// Tax percentage must not be negative.
    #[error("Tax percentage cannot be negative")]
    NegativeTaxRate,

    /// Tip percentage must not be negative.
    #[error("Tip percentage cannot be negative")]
    NegativeTipRate,

    /// An amount does not fit in 64-bit cents.
    #[error("Amount is outside the representable range")]
    AmountOutOfRange,
}
