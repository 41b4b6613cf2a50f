//! Bundled fallback category dataset.
//!
//! A static snapshot of the category catalog compiled into the binary and
//! parsed once at process start. It is served read-only while the live
//! store is down, so category-dependent pages stay renderable during an
//! outage. It cannot reflect admin edits made since the snapshot was taken;
//! that staleness is the accepted price of degraded-mode availability.

use std::sync::Arc;

use maplecart_core::Category;

/// The snapshot shipped with this build.
static BUNDLED: &str = include_str!("../data/categories.json");

/// Error loading a fallback dataset.
#[derive(Debug, thiserror::Error)]
pub enum FallbackError {
    #[error("invalid fallback dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable, process-lifetime category snapshot.
///
/// Cheaply cloneable via `Arc`.
#[derive(Debug, Clone)]
pub struct FallbackCatalog {
    categories: Arc<Vec<Category>>,
}

impl FallbackCatalog {
    /// Load the dataset bundled into the binary.
    ///
    /// # Errors
    ///
    /// Returns [`FallbackError::Parse`] if the bundled JSON is invalid;
    /// callers treat this as a startup failure.
    pub fn bundled() -> Result<Self, FallbackError> {
        Self::from_json(BUNDLED)
    }

    /// Parse a dataset from raw JSON (an ordered array of category records).
    ///
    /// # Errors
    ///
    /// Returns [`FallbackError::Parse`] on malformed input.
    pub fn from_json(raw: &str) -> Result<Self, FallbackError> {
        let categories: Vec<Category> = serde_json::from_str(raw)?;
        Ok(Self {
            categories: Arc::new(categories),
        })
    }

    /// All records, in dataset order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use maplecart_core::{CategoryStatus, ProductType};

    use super::*;

    #[test]
    fn test_bundled_dataset_parses() {
        let fallback = FallbackCatalog::bundled().unwrap();
        assert!(!fallback.is_empty());
    }

    #[test]
    fn test_bundled_dataset_covers_all_product_types() {
        let fallback = FallbackCatalog::bundled().unwrap();
        for product_type in [
            ProductType::Electronics,
            ProductType::Fashion,
            ProductType::Beauty,
            ProductType::Jewelry,
        ] {
            assert!(
                fallback
                    .categories()
                    .iter()
                    .any(|c| c.product_type == product_type),
                "missing {product_type} in bundled dataset"
            );
        }
    }

    #[test]
    fn test_bundled_dataset_has_hidden_records() {
        // The Show-only filter must have something to filter out
        let fallback = FallbackCatalog::bundled().unwrap();
        assert!(
            fallback
                .categories()
                .iter()
                .any(|c| c.status == CategoryStatus::Hide)
        );
    }

    #[test]
    fn test_fallback_categories_carry_no_products() {
        let fallback = FallbackCatalog::bundled().unwrap();
        assert!(fallback.categories().iter().all(|c| c.products.is_empty()));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(FallbackCatalog::from_json("{not json").is_err());
        assert!(FallbackCatalog::from_json(r#"[{"parent": "no id"}]"#).is_err());
    }
}
