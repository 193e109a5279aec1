//! Currency listing routes.

use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::get};
use serde::Serialize;
use serde_json::json;

use divvy_shared::Currency;

use crate::AppState;

/// Creates the currency routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/currencies", get(list_currencies))
}

/// Response for a currency.
#[derive(Debug, Serialize)]
pub struct CurrencyResponse {
    /// Currency code (ISO 4217).
    pub code: String,
    /// Currency name.
    pub name: &'static str,
    /// Currency symbol.
    pub symbol: &'static str,
    /// Number of decimal places.
    pub decimal_places: u32,
}

/// GET `/currencies` - List the supported currencies.
///
/// The table is static process-wide configuration, so this never fails.
async fn list_currencies() -> impl IntoResponse {
    let response: Vec<CurrencyResponse> = Currency::ALL
        .iter()
        .map(|c| CurrencyResponse {
            code: c.to_string(),
            name: c.name(),
            symbol: c.symbol(),
            decimal_places: c.decimal_places(),
        })
        .collect();

    (StatusCode::OK, Json(json!({ "currencies": response })))
}
