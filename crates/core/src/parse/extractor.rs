//! Pattern-based bill extraction from natural-language descriptions.
//!
//! Everything here is best-effort: unmatched fields stay `None` and fall
//! back to documented defaults (one person, zero tip, zero tax). Extracted
//! values are never fed around engine validation; a description with no
//! usable amount still ends up rejected by the engine.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

use divvy_shared::Currency;

use crate::split::{BillInput, RoundingMode};

/// Currency symbol immediately followed by an amount, e.g. `₹1450` or `$12.50`.
static SYMBOL_AMOUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([\u{20b9}$\u{20ac}\u{a3}])\s*(\d+(?:\.\d{1,2})?)").expect("valid regex")
});

/// First bare number, used when no currency symbol is present.
static BARE_AMOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:\.\d{1,2})?)").expect("valid regex"));

/// Group size, e.g. `4 people` or `2 persons`.
static PEOPLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s*(?:people|persons?)").expect("valid regex"));

/// Tip percentage, e.g. `10% tip` or `10 percent tip`.
static TIP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(?:%|percent)?\s*tip").expect("valid regex"));

/// Tax percentage, e.g. `5% tax`.
static TAX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(?:%|percent)?\s*tax").expect("valid regex"));

/// Fields recognized in a free-text bill description.
///
/// All fields are optional; [`ParsedBill::into_input`] applies the
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedBill {
    /// The bill total, if a number was found.
    pub total: Option<Decimal>,
    /// Currency matched from its symbol, if any.
    pub currency: Option<Currency>,
    /// Number of people, if stated.
    pub people: Option<u32>,
    /// Tip percentage, if stated.
    pub tip_rate: Option<Decimal>,
    /// Tax percentage, if stated.
    pub tax_rate: Option<Decimal>,
}

impl ParsedBill {
    /// Extracts bill fields from a free-text description.
    ///
    /// Recognizes a currency symbol followed by an amount (falling back to
    /// the first bare number), `N people`, `X% tip`, and `X% tax`.
    #[must_use]
    pub fn extract(text: &str) -> Self {
        let mut parsed = Self::default();

        if let Some(captures) = SYMBOL_AMOUNT.captures(text) {
            parsed.currency = captures[1]
                .chars()
                .next()
                .and_then(Currency::from_symbol);
            parsed.total = Decimal::from_str(&captures[2]).ok();
        } else if let Some(captures) = BARE_AMOUNT.captures(text) {
            parsed.total = Decimal::from_str(&captures[1]).ok();
        }

        if let Some(captures) = PEOPLE.captures(text) {
            parsed.people = captures[1].parse().ok();
        }
        if let Some(captures) = TIP.captures(text) {
            parsed.tip_rate = Decimal::from_str(&captures[1]).ok();
        }
        if let Some(captures) = TAX.captures(text) {
            parsed.tax_rate = Decimal::from_str(&captures[1]).ok();
        }

        parsed
    }

    /// Converts to a [`BillInput`], defaulting unmatched fields.
    ///
    /// A missing total becomes zero, which the engine rejects as
    /// `NonPositiveTotal`; missing people defaults to 1, missing rates to
    /// zero.
    #[must_use]
    pub fn into_input(self, rounding: RoundingMode) -> BillInput {
        BillInput {
            total: self.total.unwrap_or(Decimal::ZERO),
            tax_rate: self.tax_rate.unwrap_or(Decimal::ZERO),
            tip_rate: self.tip_rate.unwrap_or(Decimal::ZERO),
            people: self.people.unwrap_or(1),
            rounding,
        }
    }
}
