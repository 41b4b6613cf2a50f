//! The catalog service.

use sqlx::PgPool;
use tracing::instrument;

use maplecart_core::{Category, CategoryId, CategoryPatch, NewCategory, ProductType};

use crate::error::CatalogError;
use crate::fallback::FallbackCatalog;
use crate::readiness::StoreMonitor;
use crate::row::{CATEGORY_COLUMNS, CategoryRow};
use crate::source::CategorySource;

/// Category catalog access with degraded-mode reads.
///
/// Reads dispatch once per call to the live store or the bundled fallback
/// dataset, depending on the readiness monitor. Writes always target the
/// live store and propagate its errors unchanged - there is no retry and no
/// write path into the fallback.
#[derive(Clone)]
pub struct CatalogService {
    pool: PgPool,
    monitor: StoreMonitor,
    fallback: FallbackCatalog,
}

impl CatalogService {
    /// Create a new catalog service.
    #[must_use]
    pub const fn new(pool: PgPool, monitor: StoreMonitor, fallback: FallbackCatalog) -> Self {
        Self {
            pool,
            monitor,
            fallback,
        }
    }

    /// Whether reads are currently served from the live store.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.monitor.is_ready()
    }

    /// The readiness monitor backing this service.
    #[must_use]
    pub const fn monitor(&self) -> &StoreMonitor {
        &self.monitor
    }

    /// The underlying connection pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Pick the read source for this call.
    fn source(&self) -> CategorySource<'_> {
        if self.monitor.is_ready() {
            CategorySource::Live(&self.pool)
        } else {
            CategorySource::Static(&self.fallback)
        }
    }

    // =========================================================================
    // Reads (live or fallback)
    // =========================================================================

    /// Publicly visible categories, with joined products in live mode.
    ///
    /// # Errors
    ///
    /// Propagates the underlying storage error in live mode.
    #[instrument(skip(self))]
    pub async fn show_categories(&self) -> Result<Vec<Category>, CatalogError> {
        self.source().show_categories().await
    }

    /// Categories of one product type, with joined products in live mode.
    ///
    /// # Errors
    ///
    /// Propagates the underlying storage error in live mode.
    #[instrument(skip(self))]
    pub async fn categories_by_type(
        &self,
        product_type: ProductType,
    ) -> Result<Vec<Category>, CatalogError> {
        self.source().categories_by_type(product_type).await
    }

    /// Every category, unfiltered.
    ///
    /// # Errors
    ///
    /// Propagates the underlying storage error in live mode.
    #[instrument(skip(self))]
    pub async fn all_categories(&self) -> Result<Vec<Category>, CatalogError> {
        self.source().all_categories().await
    }

    /// A category by id, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Propagates the underlying storage error in live mode.
    #[instrument(skip(self))]
    pub async fn category_by_id(&self, id: CategoryId) -> Result<Option<Category>, CatalogError> {
        self.source().category_by_id(id).await
    }

    // =========================================================================
    // Writes (live store only)
    // =========================================================================

    /// Insert one category.
    ///
    /// # Errors
    ///
    /// Propagates the underlying storage error.
    #[instrument(skip(self, data), fields(parent = %data.parent))]
    pub async fn create_category(&self, data: &NewCategory) -> Result<Category, CatalogError> {
        let sql = format!(
            "INSERT INTO categories (parent, children, product_type, status) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {CATEGORY_COLUMNS}"
        );
        let row: CategoryRow = sqlx::query_as(&sql)
            .bind(&data.parent)
            .bind(&data.children)
            .bind(data.product_type.as_str())
            .bind(data.status.as_str())
            .fetch_one(&self.pool)
            .await?;
        row.into_category(Vec::new())
    }

    /// Replace the entire catalog: delete all categories, then insert the
    /// given set in order.
    ///
    /// Not transactional. A failure between the delete and the inserts
    /// leaves the catalog empty (or partially loaded); concurrent readers
    /// can observe the window.
    ///
    /// # Errors
    ///
    /// Propagates the first storage error encountered.
    #[instrument(skip(self, data), fields(count = data.len()))]
    pub async fn bulk_replace_categories(
        &self,
        data: &[NewCategory],
    ) -> Result<Vec<Category>, CatalogError> {
        sqlx::query("DELETE FROM categories")
            .execute(&self.pool)
            .await?;

        let mut inserted = Vec::with_capacity(data.len());
        for item in data {
            inserted.push(self.create_category(item).await?);
        }

        tracing::info!(count = inserted.len(), "catalog replaced");
        Ok(inserted)
    }

    /// Apply a partial update to a category and return the new record.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no category matches `id`;
    /// nothing is mutated in that case. Storage errors propagate unchanged.
    #[instrument(skip(self, patch))]
    pub async fn update_category(
        &self,
        id: CategoryId,
        patch: &CategoryPatch,
    ) -> Result<Category, CatalogError> {
        let exists: Option<i32> = sqlx::query_scalar("SELECT id FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        if exists.is_none() {
            return Err(CatalogError::NotFound);
        }

        let sql = format!(
            "UPDATE categories SET \
                parent = COALESCE($2, parent), \
                children = COALESCE($3, children), \
                product_type = COALESCE($4, product_type), \
                status = COALESCE($5, status), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {CATEGORY_COLUMNS}"
        );
        let row: CategoryRow = sqlx::query_as(&sql)
            .bind(id)
            .bind(patch.parent.as_deref())
            .bind(patch.children.as_ref())
            .bind(patch.product_type.map(ProductType::as_str))
            .bind(patch.status.map(maplecart_core::CategoryStatus::as_str))
            .fetch_one(&self.pool)
            .await?;
        row.into_category(Vec::new())
    }

    /// Delete a category and return it, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Propagates the underlying storage error.
    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: CategoryId) -> Result<Option<Category>, CatalogError> {
        let sql = format!("DELETE FROM categories WHERE id = $1 RETURNING {CATEGORY_COLUMNS}");
        let row: Option<CategoryRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| r.into_category(Vec::new())).transpose()
    }
}
