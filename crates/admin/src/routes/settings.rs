//! Shipping settings administration handlers.

use axum::{Json, extract::State};
use tracing::instrument;

use maplecart_catalog::SettingsRepository;
use maplecart_core::shipping::ShippingSettings;

use crate::error::Result;
use crate::state::AppState;

/// Show the current shipping settings snapshot.
#[instrument(skip(state))]
pub async fn show_shipping(State(state): State<AppState>) -> Result<Json<ShippingSettings>> {
    let settings = SettingsRepository::new(state.pool())
        .shipping_settings()
        .await?;
    Ok(Json(settings))
}

/// Replace the shipping settings document.
///
/// The payload is stored as-is; numeric fields are only interpreted (and
/// leniently parsed) at quote time.
#[instrument(skip(state, payload))]
pub async fn update_shipping(
    State(state): State<AppState>,
    Json(payload): Json<ShippingSettings>,
) -> Result<Json<ShippingSettings>> {
    let repository = SettingsRepository::new(state.pool());
    repository.set_shipping_settings(&payload).await?;
    Ok(Json(payload))
}
