//! Bill splitting data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use divvy_shared::RoundingMode;

/// Inputs for a bill split.
///
/// An immutable value object; validation happens in
/// [`SplitEngine::compute`](super::SplitEngine::compute).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillInput {
    /// The bill subtotal before tax and tip. Must be positive.
    pub total: Decimal,
    /// Tax rate as a percentage of the subtotal. Must not be negative.
    pub tax_rate: Decimal,
    /// Tip rate as a percentage of the subtotal. Must not be negative.
    pub tip_rate: Decimal,
    /// Number of people splitting the bill. Must be at least 1.
    pub people: u32,
    /// Rounding policy for per-person amounts.
    pub rounding: RoundingMode,
}

/// A computed bill split.
///
/// Frozen after computation: every consumer (display, share text, prompt
/// text) reads the same values, nothing is re-derived downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillSplit {
    /// The bill subtotal, as supplied.
    pub subtotal: Decimal,
    /// Tax amount at full precision.
    pub tax_amount: Decimal,
    /// Tip amount at full precision.
    pub tip_amount: Decimal,
    /// `subtotal + tax_amount + tip_amount`, computed once, full precision.
    pub grand_total: Decimal,
    /// `grand_total / people` before any rounding, full precision.
    pub raw_share: Decimal,
    /// Final two-decimal amount for each person. Sums exactly to the
    /// grand total in cents.
    pub shares: Vec<Decimal>,
    /// `shares[i] - raw_share` for each person, after reconciliation.
    pub adjustments: Vec<Decimal>,
}
