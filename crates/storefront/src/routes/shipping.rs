//! Shipping quote route handler.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::instrument;

use maplecart_core::DeliveryOption;
use maplecart_core::shipping::{parse_finite_non_negative, resolve_shipping_cost};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Query parameters for a shipping quote.
///
/// `subtotal` is parsed leniently: a malformed value quotes for an empty
/// cart rather than erroring.
#[derive(Debug, Deserialize)]
pub struct QuoteParams {
    pub subtotal: Option<String>,
    pub option: Option<String>,
}

/// A resolved shipping quote.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub subtotal: f64,
    pub option: DeliveryOption,
    pub cost: f64,
}

/// Quote the delivery charge for a cart subtotal and delivery option.
///
/// The resolver itself never fails; the only client error is an
/// unrecognized delivery option.
#[instrument(skip(state))]
pub async fn quote(
    State(state): State<AppState>,
    Query(params): Query<QuoteParams>,
) -> Result<Json<QuoteResponse>> {
    let subtotal_raw = params.subtotal.map(JsonValue::String);
    let subtotal = parse_finite_non_negative(subtotal_raw.as_ref(), 0.0);

    let option = match params.option.as_deref().map(str::trim).filter(|o| !o.is_empty()) {
        Some(raw) => raw
            .parse::<DeliveryOption>()
            .map_err(|e| AppError::BadRequest(e.to_string()))?,
        None => DeliveryOption::Standard,
    };

    let settings = state.shipping_settings().await;
    let cost = resolve_shipping_cost(subtotal, option, &settings);

    Ok(Json(QuoteResponse {
        subtotal,
        option,
        cost,
    }))
}
