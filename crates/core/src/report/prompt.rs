//! Prompt template for a downstream text-generating assistant.
//!
//! Output contract: exactly two sections separated by a line of three
//! hyphens. Section 1 is a JSON object with the computed numbers, section
//! 2 a human explanation. The assistant must reproduce the numbers, never
//! recompute them, so the template embeds every value pre-formatted.

use divvy_shared::Currency;

use super::narrative::{input_summary, two};
use crate::split::{BillInput, BillSplit};

fn two_decimal_list(values: &[rust_decimal::Decimal]) -> String {
    values
        .iter()
        .map(|v| format!("{:.2}", two(*v)))
        .collect::<Vec<_>>()
        .join(",")
}

/// Fills the fixed assistant prompt with a computed split.
#[must_use]
pub fn assistant_prompt(input: &BillInput, split: &BillSplit, currency: Currency) -> String {
    let summary = input_summary(input, currency);
    let subtotal = two(split.subtotal);
    let tax = two(split.tax_amount);
    let tip = two(split.tip_amount);
    let grand_total = two(split.grand_total);
    let per_person = two_decimal_list(&split.shares);
    let adjustments = two_decimal_list(&split.adjustments);
    let raw_share = split.raw_share.normalize();

    format!(
        "You are a clear, concise assistant that explains bill-splitting step-by-step. \
RETURN EXACTLY TWO SECTIONS separated by a line containing three hyphens (---). \
Do not add anything else.

SECTION 1 — a JSON object labelled (result_json) with ONLY these fields (numbers only, no currency symbols, two decimal places where applicable):
- subtotal (number)
- tax (number)
- tip (number)
- grand_total (number)
- per_person (array of numbers; final amounts each person pays)
- rounding_adjustments (array of numbers; final - raw for each person)

SECTION 2 — a human-readable explanation:
1. One-line summary stating grand total and per-person final amounts.
2. A numbered step-by-step arithmetic list showing formulas and numeric substitution that produced the numbers (use the exact provided numbers; show each step: tax calc, tip calc, grand total calc, per-person raw, rounding distribution).

IMPORTANT RULES:
- DO NOT RECALCULATE or alter any numbers. Use the values provided in the INPUT block exactly.
- Do not include extra commentary, fields, or sections.
- Use two decimal places for all currency numbers in the JSON and explanation.
- If per_person contains more than one value, show them in order (Person 1, Person 2, ...).

INPUT (use these values exactly):
Currency: {currency}
Input summary: \"{summary}\"
Provided computed values (use exactly, do not recalc):
subtotal = {subtotal:.2}
tax = {tax:.2}
tip = {tip:.2}
grand_total = {grand_total:.2}
per_person_raw = {raw_share}
per_person_rounded = [{per_person}]
rounding_adjustments = [{adjustments}]

OUTPUT FORMAT EXAMPLE (follow structure exactly):
(result_json)
{{\"subtotal\":{subtotal:.2},\"tax\":{tax:.2},\"tip\":{tip:.2},\"grand_total\":{grand_total:.2},\"per_person\":[{per_person}],\"rounding_adjustments\":[{adjustments}]}}

---
Summary: The grand total ({grand_total:.2}) split among {people} people becomes {spaced_shares} after rounding.

Steps:
1) Tax = {subtotal:.2} × {tax_rate} / 100 = {tax:.2}
2) Tip = {subtotal:.2} × {tip_rate} / 100 = {tip:.2}
3) Grand total = {subtotal:.2} + {tax:.2} + {tip:.2} = {grand_total:.2}
4) Per-person (raw) = {grand_total:.2} ÷ {people} = {raw_share} → rounded to two decimals
5) Final per-person amounts (rounded, distributed leftover cents): {spaced_shares}",
        people = split.shares.len(),
        tax_rate = input.tax_rate.normalize(),
        tip_rate = input.tip_rate.normalize(),
        spaced_shares = per_person.replace(',', ", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    use crate::split::{RoundingMode, SplitEngine};

    fn reference() -> (BillInput, BillSplit) {
        let input = BillInput {
            total: dec!(1450.00),
            tax_rate: dec!(5),
            tip_rate: dec!(10),
            people: 4,
            rounding: RoundingMode::Nearest,
        };
        let split = SplitEngine::compute(&input).unwrap();
        (input, split)
    }

    #[test]
    fn test_prompt_has_exactly_one_separator() {
        let (input, split) = reference();
        let prompt = assistant_prompt(&input, &split, Currency::Inr);
        assert_eq!(prompt.matches("\n---\n").count(), 1);
    }

    #[test]
    fn test_prompt_embeds_computed_values() {
        let (input, split) = reference();
        let prompt = assistant_prompt(&input, &split, Currency::Inr);

        assert!(prompt.contains("Currency: INR"));
        assert!(prompt.contains("subtotal = 1450.00"));
        assert!(prompt.contains("tax = 72.50"));
        assert!(prompt.contains("tip = 145.00"));
        assert!(prompt.contains("grand_total = 1667.50"));
        assert!(prompt.contains("per_person_raw = 416.875\n"));
        assert!(prompt.contains("per_person_rounded = [416.88,416.88,416.87,416.87]"));
        assert!(prompt.contains("rounding_adjustments = [0.01,0.01,-0.01,-0.01]"));
        assert!(prompt.contains("Input summary: \"Bill ₹1450.00, 4 people, 10% tip, 5% tax, split equally\""));
    }

    #[test]
    fn test_prompt_example_json_matches_contract() {
        let (input, split) = reference();
        let prompt = assistant_prompt(&input, &split, Currency::Inr);

        assert!(prompt.contains(
            "{\"subtotal\":1450.00,\"tax\":72.50,\"tip\":145.00,\"grand_total\":1667.50,\
             \"per_person\":[416.88,416.88,416.87,416.87],\
             \"rounding_adjustments\":[0.01,0.01,-0.01,-0.01]}"
        ));
    }

    #[test]
    fn test_prompt_forbids_recalculation() {
        let (input, split) = reference();
        let prompt = assistant_prompt(&input, &split, Currency::Usd);
        assert!(prompt.contains("DO NOT RECALCULATE"));
        assert!(prompt.contains("Currency: USD"));
    }
}
