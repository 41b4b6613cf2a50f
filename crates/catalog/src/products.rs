//! Product repository for the live store.
//!
//! Products have no fallback dataset; every operation requires the live
//! store and propagates its errors unchanged.

use sqlx::PgPool;

use maplecart_core::{CategoryId, NewProduct, Product, ProductId, ProductPatch};

use crate::error::CatalogError;
use crate::row::{PRODUCT_COLUMNS, ProductRow};

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All products, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, CatalogError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id");
        let rows: Vec<ProductRow> = sqlx::query_as(&sql).fetch_all(self.pool).await?;
        rows.into_iter().map(Product::try_from).collect()
    }

    /// Products referencing one category, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Database` if the query fails.
    pub async fn list_by_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<Product>, CatalogError> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE category_id = $1 ORDER BY id"
        );
        let rows: Vec<ProductRow> = sqlx::query_as(&sql)
            .bind(category_id)
            .fetch_all(self.pool)
            .await?;
        rows.into_iter().map(Product::try_from).collect()
    }

    /// A product by id, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Database` if the query fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
        let row: Option<ProductRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;
        row.map(Product::try_from).transpose()
    }

    /// Insert one product.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Database` if the insert fails (including a
    /// reference to a missing category).
    pub async fn create(&self, data: &NewProduct) -> Result<Product, CatalogError> {
        let sql = format!(
            "INSERT INTO products (category_id, name, product_type, price, description, image_url) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {PRODUCT_COLUMNS}"
        );
        let row: ProductRow = sqlx::query_as(&sql)
            .bind(data.category_id)
            .bind(&data.name)
            .bind(data.product_type.as_str())
            .bind(data.price)
            .bind(data.description.as_deref())
            .bind(data.image_url.as_deref())
            .fetch_one(self.pool)
            .await?;
        Product::try_from(row)
    }

    /// Apply a partial update to a product and return the new record.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no product matches `id`; nothing
    /// is mutated in that case.
    pub async fn update(&self, id: ProductId, patch: &ProductPatch) -> Result<Product, CatalogError> {
        let exists: Option<i32> = sqlx::query_scalar("SELECT id FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;
        if exists.is_none() {
            return Err(CatalogError::NotFound);
        }

        let sql = format!(
            "UPDATE products SET \
                name = COALESCE($2, name), \
                category_id = COALESCE($3, category_id), \
                product_type = COALESCE($4, product_type), \
                price = COALESCE($5, price), \
                description = COALESCE($6, description), \
                image_url = COALESCE($7, image_url), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {PRODUCT_COLUMNS}"
        );
        let row: ProductRow = sqlx::query_as(&sql)
            .bind(id)
            .bind(patch.name.as_deref())
            .bind(patch.category_id)
            .bind(patch.product_type.map(maplecart_core::ProductType::as_str))
            .bind(patch.price)
            .bind(patch.description.as_deref())
            .bind(patch.image_url.as_deref())
            .fetch_one(self.pool)
            .await?;
        Product::try_from(row)
    }

    /// Delete a product and return it, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Database` if the query fails.
    pub async fn delete(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        let sql = format!("DELETE FROM products WHERE id = $1 RETURNING {PRODUCT_COLUMNS}");
        let row: Option<ProductRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;
        row.map(Product::try_from).transpose()
    }
}
