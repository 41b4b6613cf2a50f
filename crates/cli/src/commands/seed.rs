//! Seed the catalog from a category dataset.
//!
//! Loads the bundled fallback snapshot (or a JSON file with the same
//! format) and replaces the live catalog with it via the bulk-replace
//! operation, so the seeded database matches what degraded mode serves.

use secrecy::SecretString;
use tracing::info;

use maplecart_catalog::{
    CatalogError, CatalogService, FallbackCatalog, FallbackError, StoreMonitor,
};
use maplecart_core::NewCategory;

/// Errors that can occur while seeding.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid dataset: {0}")]
    Dataset(#[from] FallbackError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Replace the live catalog with a category dataset.
///
/// # Arguments
///
/// * `file` - Path to a JSON dataset; `None` uses the bundled snapshot
///
/// # Errors
///
/// Returns an error if the environment is incomplete, the dataset cannot
/// be read or parsed, or the bulk replace fails.
pub async fn categories(file: Option<&str>) -> Result<(), SeedError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .map(SecretString::from)
        .map_err(|_| SeedError::MissingEnvVar("DATABASE_URL"))?;

    let dataset = match file {
        Some(path) => {
            info!(path = %path, "Loading category dataset from file");
            let raw = tokio::fs::read_to_string(path).await?;
            FallbackCatalog::from_json(&raw)?
        }
        None => {
            info!("Loading bundled category dataset");
            FallbackCatalog::bundled()?
        }
    };

    let data: Vec<NewCategory> = dataset
        .categories()
        .iter()
        .map(|c| NewCategory {
            parent: c.parent.clone(),
            children: c.children.clone(),
            product_type: c.product_type,
            status: c.status,
        })
        .collect();

    let pool = maplecart_catalog::create_pool(&database_url)?;
    let service = CatalogService::new(pool, StoreMonitor::new(), dataset);

    let inserted = service.bulk_replace_categories(&data).await?;
    info!(count = inserted.len(), "Catalog seeded");

    Ok(())
}
