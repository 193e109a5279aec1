//! Bill split computation and remainder reconciliation.
//!
//! CRITICAL: Rounding strategy for splits:
//! - Tax, tip, grand total, and raw share keep full decimal precision
//! - Per-person rounding happens once, at cent granularity
//! - Reconciliation runs in integer cents so shares sum exactly to the
//!   grand total in the smallest currency unit

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use rust_decimal::prelude::ToPrimitive;

use super::error::SplitError;
use super::types::{BillInput, BillSplit};

/// Engine for computing bill splits.
///
/// Pure and reentrant: every call is independent, with no shared state
/// and no I/O.
pub struct SplitEngine;

impl SplitEngine {
    /// Computes the per-person split for a bill.
    ///
    /// `nearest` rounds half away from zero; `up` and `down` are ceiling
    /// and floor at cent granularity. Whatever the mode, the cent
    /// remainder left over after rounding is fully exhausted: extra cents
    /// go to the earliest people, missing cents come off the latest, so
    /// earlier people never pay less than later ones.
    ///
    /// # Errors
    ///
    /// Returns `SplitError` when the total is not positive, there are no
    /// participants, a rate is negative, or an amount does not fit in
    /// 64-bit cents. No partial result is produced.
    pub fn compute(input: &BillInput) -> Result<BillSplit, SplitError> {
        Self::validate(input)?;

        let tax_amount = percentage_of(input.total, input.tax_rate)?;
        let tip_amount = percentage_of(input.total, input.tip_rate)?;
        let grand_total = input
            .total
            .checked_add(tax_amount)
            .and_then(|t| t.checked_add(tip_amount))
            .ok_or(SplitError::AmountOutOfRange)?;
        let raw_share = grand_total / Decimal::from(input.people);

        let people = usize::try_from(input.people).map_err(|_| SplitError::AmountOutOfRange)?;
        let per_cents = to_cents(raw_share.round_dp_with_strategy(2, input.rounding.strategy()))?;
        let target_cents = to_cents(grand_total)?;
        let assigned_cents = per_cents
            .checked_mul(i64::from(input.people))
            .ok_or(SplitError::AmountOutOfRange)?;

        let mut cents = vec![per_cents; people];
        let mut delta = target_cents - assigned_cents;

        // Exhaust the remainder one cent at a time, cycling if it ever
        // exceeds the number of people.
        let mut slot = 0usize;
        while delta > 0 {
            cents[slot % people] += 1;
            delta -= 1;
            slot += 1;
        }
        while delta < 0 {
            cents[people - 1 - (slot % people)] -= 1;
            delta += 1;
            slot += 1;
        }

        let shares: Vec<Decimal> = cents.into_iter().map(|c| Decimal::new(c, 2)).collect();
        let adjustments: Vec<Decimal> = shares.iter().map(|s| s - raw_share).collect();

        Ok(BillSplit {
            subtotal: input.total,
            tax_amount,
            tip_amount,
            grand_total,
            raw_share,
            shares,
            adjustments,
        })
    }

    /// Validates a bill input without computing anything.
    pub fn validate(input: &BillInput) -> Result<(), SplitError> {
        if input.total <= Decimal::ZERO {
            return Err(SplitError::NonPositiveTotal);
        }
        if input.people == 0 {
            return Err(SplitError::NoParticipants);
        }
        if input.tax_rate < Decimal::ZERO {
            return Err(SplitError::NegativeTaxRate);
        }
        if input.tip_rate < Decimal::ZERO {
            return Err(SplitError::NegativeTipRate);
        }
        Ok(())
    }
}

/// `amount * rate / 100` at full precision.
fn percentage_of(amount: Decimal, rate: Decimal) -> Result<Decimal, SplitError> {
    amount
        .checked_mul(rate)
        .map(|v| v / Decimal::ONE_HUNDRED)
        .ok_or(SplitError::AmountOutOfRange)
}

/// Converts an amount to integer cents, rounding half away from zero when
/// the amount carries sub-cent precision.
fn to_cents(amount: Decimal) -> Result<i64, SplitError> {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or(SplitError::AmountOutOfRange)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(SplitError::AmountOutOfRange)
}
