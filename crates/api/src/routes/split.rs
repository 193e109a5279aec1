//! Bill split routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::debug;

use divvy_core::parse::ParsedBill;
use divvy_core::report;
use divvy_core::split::{BillInput, BillSplit, RoundingMode, SplitEngine};
use divvy_shared::{AppError, Currency};

use crate::AppState;
use crate::routes::error_response;

/// Creates the split routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/split", post(compute_split))
        .route("/split/parse", post(compute_split_from_text))
        .route("/split/prompt", post(generate_prompt))
}

/// Request body for a structured split.
#[derive(Debug, Deserialize)]
pub struct SplitRequest {
    /// Bill subtotal before tax and tip.
    pub total: Decimal,
    /// Currency code; server default when omitted.
    #[serde(default)]
    pub currency: Option<Currency>,
    /// Number of people splitting the bill.
    pub people: u32,
    /// Tip percentage.
    #[serde(default)]
    pub tip_percent: Decimal,
    /// Tax percentage.
    #[serde(default)]
    pub tax_percent: Decimal,
    /// Rounding mode for per-person amounts; server default when omitted.
    #[serde(default)]
    pub rounding: Option<RoundingMode>,
}

impl SplitRequest {
    fn into_input(self, rounding: RoundingMode) -> BillInput {
        BillInput {
            total: self.total,
            tax_rate: self.tax_percent,
            tip_rate: self.tip_percent,
            people: self.people,
            rounding,
        }
    }
}

/// Request body for a free-text split.
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    /// Natural-language bill description.
    pub text: String,
    /// Rounding mode for per-person amounts; server default when omitted.
    #[serde(default)]
    pub rounding: Option<RoundingMode>,
}

/// Response for a computed split.
#[derive(Debug, Serialize)]
pub struct SplitResponse {
    /// Currency code used for display.
    pub currency: String,
    /// Currency symbol.
    pub symbol: &'static str,
    /// Rounding mode applied to per-person amounts.
    pub rounding: RoundingMode,
    /// Bill subtotal.
    pub subtotal: Decimal,
    /// Tax amount, two decimals.
    pub tax: Decimal,
    /// Tip amount, two decimals.
    pub tip: Decimal,
    /// Grand total, two decimals.
    pub grand_total: Decimal,
    /// Raw per-person share at full precision.
    pub per_person_raw: Decimal,
    /// Final per-person amounts; these sum exactly to the grand total.
    pub per_person: Vec<Decimal>,
    /// Rounding delta applied to each person, two decimals.
    pub rounding_adjustments: Vec<Decimal>,
    /// The five-step arithmetic narrative.
    pub steps: Vec<String>,
    /// One-line restatement of the inputs.
    pub summary: String,
    /// Plain-text export block.
    pub share_text: String,
}

/// Two-decimal display rounding, half away from zero.
fn display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

impl SplitResponse {
    fn build(input: &BillInput, split: &BillSplit, currency: Currency) -> Self {
        Self {
            currency: currency.to_string(),
            symbol: currency.symbol(),
            rounding: input.rounding,
            subtotal: display(split.subtotal),
            tax: display(split.tax_amount),
            tip: display(split.tip_amount),
            grand_total: display(split.grand_total),
            per_person_raw: split.raw_share.normalize(),
            per_person: split.shares.clone(),
            rounding_adjustments: split.adjustments.iter().copied().map(display).collect(),
            steps: report::arithmetic_steps(input, split, currency),
            summary: report::input_summary(input, currency),
            share_text: report::share_text(split, currency),
        }
    }
}

/// POST `/split` - Compute a bill split from structured input.
async fn compute_split(
    State(state): State<AppState>,
    Json(request): Json<SplitRequest>,
) -> impl IntoResponse {
    let currency = request
        .currency
        .unwrap_or(state.config.split.default_currency);
    let rounding = request
        .rounding
        .unwrap_or(state.config.split.default_rounding);
    let input = request.into_input(rounding);

    match SplitEngine::compute(&input) {
        Ok(split) => {
            (StatusCode::OK, Json(SplitResponse::build(&input, &split, currency))).into_response()
        }
        Err(e) => error_response(&AppError::Validation(e.to_string())),
    }
}

/// POST `/split/parse` - Extract a bill from free text, then split it.
async fn compute_split_from_text(
    State(state): State<AppState>,
    Json(request): Json<ParseRequest>,
) -> impl IntoResponse {
    let parsed = ParsedBill::extract(&request.text);
    debug!(?parsed, "extracted bill from text");

    let currency = parsed
        .currency
        .unwrap_or(state.config.split.default_currency);
    let rounding = request
        .rounding
        .unwrap_or(state.config.split.default_rounding);
    let input = parsed.into_input(rounding);

    match SplitEngine::compute(&input) {
        Ok(split) => {
            (StatusCode::OK, Json(SplitResponse::build(&input, &split, currency))).into_response()
        }
        Err(e) => error_response(&AppError::Validation(e.to_string())),
    }
}

/// Response for a generated assistant prompt.
#[derive(Debug, Serialize)]
pub struct PromptResponse {
    /// The filled prompt text.
    pub prompt: String,
}

/// POST `/split/prompt` - Compute a split and return the assistant prompt.
async fn generate_prompt(
    State(state): State<AppState>,
    Json(request): Json<SplitRequest>,
) -> impl IntoResponse {
    let currency = request
        .currency
        .unwrap_or(state.config.split.default_currency);
    let rounding = request
        .rounding
        .unwrap_or(state.config.split.default_rounding);
    let input = request.into_input(rounding);

    match SplitEngine::compute(&input) {
        Ok(split) => {
            let prompt = report::assistant_prompt(&input, &split, currency);
            (StatusCode::OK, Json(PromptResponse { prompt })).into_response()
        }
        Err(e) => error_response(&AppError::Validation(e.to_string())),
    }
}
