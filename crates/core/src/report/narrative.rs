//! Human-readable rendering of bill splits.
//!
//! All currency values are shown with exactly two decimal places; the raw
//! per-person share is the one value shown with three, since it exists to
//! explain where the rounding came from.

use rust_decimal::{Decimal, RoundingStrategy};

use divvy_shared::{Currency, Money};

use crate::split::{BillInput, BillSplit};

/// Rounds to two decimals, half away from zero, for display.
pub(crate) fn two(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn money(amount: Decimal, currency: Currency) -> Money {
    Money::new(two(amount), currency)
}

fn joined_shares(split: &BillSplit, currency: Currency) -> String {
    split
        .shares
        .iter()
        .map(|share| money(*share, currency).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One-line restatement of the inputs, e.g.
/// `Bill ₹1450.00, 4 people, 10% tip, 5% tax, split equally`.
#[must_use]
pub fn input_summary(input: &BillInput, currency: Currency) -> String {
    let mut summary = format!(
        "Bill {}, {} people",
        money(input.total, currency),
        input.people
    );
    if input.tip_rate > Decimal::ZERO {
        summary.push_str(&format!(", {}% tip", input.tip_rate.normalize()));
    }
    if input.tax_rate > Decimal::ZERO {
        summary.push_str(&format!(", {}% tax", input.tax_rate.normalize()));
    }
    summary.push_str(", split equally");
    summary
}

/// The five fixed arithmetic steps: tax, tip, grand total, raw per-person,
/// final rounded amounts.
#[must_use]
pub fn arithmetic_steps(input: &BillInput, split: &BillSplit, currency: Currency) -> Vec<String> {
    vec![
        format!(
            "1. Tax ({}%): {} × {}% = {}",
            input.tax_rate.normalize(),
            money(split.subtotal, currency),
            input.tax_rate.normalize(),
            money(split.tax_amount, currency),
        ),
        format!(
            "2. Tip ({}%): {} × {}% = {}",
            input.tip_rate.normalize(),
            money(split.subtotal, currency),
            input.tip_rate.normalize(),
            money(split.tip_amount, currency),
        ),
        format!(
            "3. Grand Total: {} + {} + {} = {}",
            money(split.subtotal, currency),
            money(split.tax_amount, currency),
            money(split.tip_amount, currency),
            money(split.grand_total, currency),
        ),
        format!(
            "4. Per Person (raw): {} ÷ {} = {}{:.3}",
            money(split.grand_total, currency),
            input.people,
            currency.symbol(),
            split.raw_share,
        ),
        format!("5. Final amounts: {}", joined_shares(split, currency)),
    ]
}

/// One-line summary of the outcome.
#[must_use]
pub fn summary_line(split: &BillSplit, currency: Currency) -> String {
    format!(
        "Split {} among {} people: {}",
        money(split.grand_total, currency),
        split.shares.len(),
        joined_shares(split, currency),
    )
}

/// Plain-text export block for sharing a result.
#[must_use]
pub fn share_text(split: &BillSplit, currency: Currency) -> String {
    format!(
        "Bill Split Result:\n\
         Original: {}\n\
         Tax: {}\n\
         Tip: {}\n\
         Total: {}\n\
         Per person: {}",
        money(split.subtotal, currency),
        money(split.tax_amount, currency),
        money(split.tip_amount, currency),
        money(split.grand_total, currency),
        joined_shares(split, currency),
    )
}
