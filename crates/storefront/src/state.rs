//! Application state shared across handlers.

use std::sync::Arc;

use moka::future::Cache;

use maplecart_catalog::{CatalogService, SHIPPING_SETTINGS_KEY, SettingsRepository};
use maplecart_core::shipping::ShippingSettings;

use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the catalog service and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogService,
    settings_cache: Cache<&'static str, ShippingSettings>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: CatalogService) -> Self {
        let settings_cache = Cache::builder()
            .max_capacity(1)
            .time_to_live(config.settings_ttl)
            .build();

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                settings_cache,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog service.
    #[must_use]
    pub fn catalog(&self) -> &CatalogService {
        &self.inner.catalog
    }

    /// Current shipping settings snapshot, cached briefly.
    ///
    /// A storage failure degrades to the default snapshot: the quote path
    /// must always produce a number.
    pub async fn shipping_settings(&self) -> ShippingSettings {
        self.inner
            .settings_cache
            .get_with(SHIPPING_SETTINGS_KEY, async {
                let repository = SettingsRepository::new(self.inner.catalog.pool());
                match repository.shipping_settings().await {
                    Ok(settings) => settings,
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to load shipping settings, using defaults");
                        ShippingSettings::default()
                    }
                }
            })
            .await
    }
}
