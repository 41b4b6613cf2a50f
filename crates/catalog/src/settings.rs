//! Settings database operations.
//!
//! Settings are JSONB documents keyed by name. The shipping configuration
//! lives under [`SHIPPING_SETTINGS_KEY`] and is read as an immutable
//! snapshot; a missing or undeserializable document degrades to the default
//! snapshot so shipping quotes always resolve to a number.

use serde_json::Value as JsonValue;
use sqlx::PgPool;

use maplecart_core::shipping::ShippingSettings;

use crate::error::CatalogError;

/// Settings key holding the [`ShippingSettings`] document.
pub const SHIPPING_SETTINGS_KEY: &str = "shipping";

/// Repository for settings operations.
pub struct SettingsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SettingsRepository<'a> {
    /// Create a new settings repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a setting value.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Database` if the query fails.
    pub async fn get(&self, key: &str) -> Result<Option<JsonValue>, CatalogError> {
        let value: Option<JsonValue> =
            sqlx::query_scalar("SELECT value FROM settings WHERE key = $1")
                .bind(key)
                .fetch_optional(self.pool)
                .await?;
        Ok(value)
    }

    /// Set a setting value.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Database` if the query fails.
    pub async fn set(&self, key: &str, value: &JsonValue) -> Result<(), CatalogError> {
        sqlx::query(
            "INSERT INTO settings (key, value) VALUES ($1, $2) \
             ON CONFLICT (key) DO UPDATE SET value = $2, updated_at = NOW()",
        )
        .bind(key)
        .bind(value)
        .execute(self.pool)
        .await?;
        Ok(())
    }

    /// Load the shipping settings snapshot.
    ///
    /// A missing or malformed document yields `ShippingSettings::default()`
    /// with a warning - never an error.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Database` if the query itself fails.
    pub async fn shipping_settings(&self) -> Result<ShippingSettings, CatalogError> {
        let Some(value) = self.get(SHIPPING_SETTINGS_KEY).await? else {
            return Ok(ShippingSettings::default());
        };

        match serde_json::from_value(value) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                tracing::warn!(error = %e, "malformed shipping settings document, using defaults");
                Ok(ShippingSettings::default())
            }
        }
    }

    /// Store the shipping settings snapshot.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Database` if the write fails, or
    /// `CatalogError::DataCorruption` if the snapshot cannot be serialized.
    pub async fn set_shipping_settings(
        &self,
        settings: &ShippingSettings,
    ) -> Result<(), CatalogError> {
        let value = serde_json::to_value(settings)
            .map_err(|e| CatalogError::DataCorruption(e.to_string()))?;
        self.set(SHIPPING_SETTINGS_KEY, &value).await
    }
}
