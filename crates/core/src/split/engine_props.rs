//! Property-based tests for the split engine.
//!
//! - Reconciliation invariant: shares always sum to the grand total in cents
//! - Shape invariant: one share and one adjustment per person
//! - Rounding mode only redistributes, it never changes the totals

use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

use super::engine::SplitEngine;
use super::types::{BillInput, RoundingMode};

/// Strategy to generate positive bill totals (0.01 to 1,000,000.00).
fn positive_total() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate percentage rates (0.00% to 100.00%).
fn rate() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000i64).prop_map(|v| Decimal::new(v, 2))
}

/// Strategy to generate group sizes (1 to 100 people).
fn people() -> impl Strategy<Value = u32> {
    1u32..=100
}

/// Strategy covering every rounding mode.
fn rounding_mode() -> impl Strategy<Value = RoundingMode> {
    prop_oneof![
        Just(RoundingMode::Nearest),
        Just(RoundingMode::Up),
        Just(RoundingMode::Down),
    ]
}

/// The grand total expressed in whole cents, half away from zero.
fn grand_total_in_cents(grand_total: Decimal) -> Decimal {
    grand_total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* valid input and rounding mode, the shares SHALL sum to
    /// the grand total in the smallest currency unit. Exact, no tolerance.
    #[test]
    fn prop_shares_sum_to_grand_total(
        total in positive_total(),
        tax_rate in rate(),
        tip_rate in rate(),
        people in people(),
        rounding in rounding_mode(),
    ) {
        let split = SplitEngine::compute(&BillInput { total, tax_rate, tip_rate, people, rounding })
            .expect("valid input");
        let sum: Decimal = split.shares.iter().copied().sum();
        prop_assert_eq!(sum, grand_total_in_cents(split.grand_total));
    }

    /// *For any* valid input, there SHALL be exactly one share and one
    /// adjustment per person.
    #[test]
    fn prop_one_share_per_person(
        total in positive_total(),
        tax_rate in rate(),
        tip_rate in rate(),
        people in people(),
        rounding in rounding_mode(),
    ) {
        let split = SplitEngine::compute(&BillInput { total, tax_rate, tip_rate, people, rounding })
            .expect("valid input");
        prop_assert_eq!(split.shares.len(), people as usize);
        prop_assert_eq!(split.adjustments.len(), people as usize);
    }

    /// *For any* valid input, computing twice SHALL yield identical output.
    #[test]
    fn prop_compute_is_deterministic(
        total in positive_total(),
        tax_rate in rate(),
        tip_rate in rate(),
        people in people(),
        rounding in rounding_mode(),
    ) {
        let bill = BillInput { total, tax_rate, tip_rate, people, rounding };
        let first = SplitEngine::compute(&bill).expect("valid input");
        let second = SplitEngine::compute(&bill).expect("valid input");
        prop_assert_eq!(first, second);
    }

    /// *For any* valid input, changing the rounding mode SHALL change only
    /// the distribution of shares, never the derived totals.
    #[test]
    fn prop_mode_only_redistributes(
        total in positive_total(),
        tax_rate in rate(),
        tip_rate in rate(),
        people in people(),
    ) {
        let base = BillInput { total, tax_rate, tip_rate, people, rounding: RoundingMode::Nearest };
        let nearest = SplitEngine::compute(&base).expect("valid input");

        for rounding in [RoundingMode::Up, RoundingMode::Down] {
            let other = SplitEngine::compute(&BillInput { rounding, ..base })
                .expect("valid input");
            prop_assert_eq!(other.tax_amount, nearest.tax_amount);
            prop_assert_eq!(other.tip_amount, nearest.tip_amount);
            prop_assert_eq!(other.grand_total, nearest.grand_total);
            prop_assert_eq!(other.raw_share, nearest.raw_share);
            prop_assert_eq!(
                other.shares.iter().copied().sum::<Decimal>(),
                nearest.shares.iter().copied().sum::<Decimal>()
            );
        }
    }

    /// *For any* valid input, no two shares SHALL differ by more than one
    /// cent, and shares SHALL never increase from front to back.
    #[test]
    fn prop_shares_fair_and_ordered(
        total in positive_total(),
        tax_rate in rate(),
        tip_rate in rate(),
        people in people(),
        rounding in rounding_mode(),
    ) {
        let split = SplitEngine::compute(&BillInput { total, tax_rate, tip_rate, people, rounding })
            .expect("valid input");
        let cent = Decimal::new(1, 2);
        for pair in split.shares.windows(2) {
            prop_assert!(pair[0] >= pair[1]);
            prop_assert!(pair[0] - pair[1] <= cent);
        }
    }
}
