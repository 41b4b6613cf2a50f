//! Integration tests for Maplecart.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database, run migrations, seed
//! mc-cli migrate && mc-cli seed
//!
//! # Start both servers
//! cargo run -p maplecart-storefront &
//! cargo run -p maplecart-admin &
//!
//! # Run integration tests
//! cargo test -p maplecart-integration-tests -- --ignored
//! ```
//!
//! The shipping tests mutate the settings document; run the storefront with
//! `STOREFRONT_SETTINGS_TTL_SECS=1` so the cached snapshot expires between
//! requests.
//!
//! # Test Categories
//!
//! - `storefront_catalog` - Public category reads and shipping quotes
//! - `admin_catalog` - Category/product CRUD, bulk replace, settings

#![cfg_attr(not(test), forbid(unsafe_code))]

/// Base URL for the storefront API (configurable via environment).
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Base URL for the admin API (configurable via environment).
#[must_use]
pub fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// Create an HTTP client for tests.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
#[allow(clippy::missing_panics_doc)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .build()
        .expect("Failed to create HTTP client")
}
