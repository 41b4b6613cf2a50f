//! Maplecart Catalog - category and product data access.
//!
//! The catalog is served from two sources:
//!
//! - the **live store**: `PostgreSQL` via `sqlx`, the source of truth for
//!   categories, products, and settings
//! - the **fallback dataset**: a category snapshot bundled into the binary,
//!   served read-only whenever the live store is not connected
//!
//! A [`StoreMonitor`] tracks the connection state; [`CatalogService`] picks
//! the source once per read call. Writes always target the live store.
//!
//! # Tables
//!
//! - `categories` - catalog categories (parent name, children, type, status)
//! - `products` - catalog products, referencing their owning category
//! - `settings` - application settings documents (JSONB)
//!
//! # Migrations
//!
//! Migrations are stored in `crates/catalog/migrations/` and run via:
//! ```bash
//! cargo run -p maplecart-cli -- migrate
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod error;
mod fallback;
mod products;
mod readiness;
mod row;
mod service;
mod settings;
mod source;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

pub use error::CatalogError;
pub use fallback::{FallbackCatalog, FallbackError};
pub use products::ProductRepository;
pub use readiness::{ConnectionState, StoreMonitor};
pub use service::CatalogService;
pub use settings::{SHIPPING_SETTINGS_KEY, SettingsRepository};
pub use source::CategorySource;

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// Connections are established lazily: the pool is usable immediately and a
/// binary can come up in degraded mode while the store is unreachable.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection string cannot be parsed.
pub fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect_lazy(database_url.expose_secret())
}
