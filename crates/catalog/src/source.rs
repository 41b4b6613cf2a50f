//! Category data-source dispatch.
//!
//! Every read operation runs against exactly one source, chosen per call
//! from the readiness state: the live store when connected, the bundled
//! fallback dataset otherwise. Both variants implement the same read
//! contract; the fallback serves categories without joined products.

use std::collections::HashMap;

use sqlx::PgPool;

use maplecart_core::{Category, CategoryId, CategoryStatus, Product, ProductType};

use crate::error::CatalogError;
use crate::fallback::FallbackCatalog;
use crate::row::{CATEGORY_COLUMNS, CategoryRow, PRODUCT_COLUMNS, ProductRow};

/// A single-dispatch handle on the category read path.
pub enum CategorySource<'a> {
    /// Live store queries.
    Live(&'a PgPool),
    /// Bundled snapshot, served while the store is down.
    Static(&'a FallbackCatalog),
}

impl CategorySource<'_> {
    /// Categories with `Show` status, joined with their products in live
    /// mode.
    ///
    /// # Errors
    ///
    /// Propagates the underlying storage error in live mode; the static
    /// source cannot fail.
    pub async fn show_categories(&self) -> Result<Vec<Category>, CatalogError> {
        match self {
            Self::Live(pool) => {
                let sql = format!(
                    "SELECT {CATEGORY_COLUMNS} FROM categories WHERE status = $1 ORDER BY id"
                );
                let rows: Vec<CategoryRow> = sqlx::query_as(&sql)
                    .bind(CategoryStatus::Show.as_str())
                    .fetch_all(*pool)
                    .await?;
                attach_products(pool, rows).await
            }
            Self::Static(fallback) => Ok(filter_static(fallback, |c| {
                c.status == CategoryStatus::Show
            })),
        }
    }

    /// Categories whose product type exactly equals `product_type`, joined
    /// with their products in live mode.
    ///
    /// # Errors
    ///
    /// Propagates the underlying storage error in live mode.
    pub async fn categories_by_type(
        &self,
        product_type: ProductType,
    ) -> Result<Vec<Category>, CatalogError> {
        match self {
            Self::Live(pool) => {
                let sql = format!(
                    "SELECT {CATEGORY_COLUMNS} FROM categories WHERE product_type = $1 ORDER BY id"
                );
                let rows: Vec<CategoryRow> = sqlx::query_as(&sql)
                    .bind(product_type.as_str())
                    .fetch_all(*pool)
                    .await?;
                attach_products(pool, rows).await
            }
            Self::Static(fallback) => Ok(filter_static(fallback, |c| {
                c.product_type == product_type
            })),
        }
    }

    /// The full category list, unfiltered and without joined products.
    ///
    /// # Errors
    ///
    /// Propagates the underlying storage error in live mode.
    pub async fn all_categories(&self) -> Result<Vec<Category>, CatalogError> {
        match self {
            Self::Live(pool) => {
                let sql = format!("SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY id");
                let rows: Vec<CategoryRow> = sqlx::query_as(&sql).fetch_all(*pool).await?;
                rows.into_iter()
                    .map(|row| row.into_category(Vec::new()))
                    .collect()
            }
            Self::Static(fallback) => Ok(fallback.categories().to_vec()),
        }
    }

    /// A single category by id, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Propagates the underlying storage error in live mode.
    pub async fn category_by_id(
        &self,
        id: CategoryId,
    ) -> Result<Option<Category>, CatalogError> {
        match self {
            Self::Live(pool) => {
                let sql = format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = $1");
                let row: Option<CategoryRow> =
                    sqlx::query_as(&sql).bind(id).fetch_optional(*pool).await?;
                row.map(|r| r.into_category(Vec::new())).transpose()
            }
            Self::Static(fallback) => Ok(fallback
                .categories()
                .iter()
                .find(|c| c.id == id)
                .cloned()),
        }
    }
}

fn filter_static(fallback: &FallbackCatalog, predicate: impl Fn(&Category) -> bool) -> Vec<Category> {
    fallback
        .categories()
        .iter()
        .filter(|c| predicate(c))
        .cloned()
        .collect()
}

/// Fetch the products referenced by `rows` and fold them into categories.
async fn attach_products(
    pool: &PgPool,
    rows: Vec<CategoryRow>,
) -> Result<Vec<Category>, CatalogError> {
    let mut by_category: HashMap<i32, Vec<Product>> = HashMap::new();

    let ids: Vec<i32> = rows.iter().map(|r| r.id).collect();
    if !ids.is_empty() {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE category_id = ANY($1) ORDER BY id"
        );
        let product_rows: Vec<ProductRow> =
            sqlx::query_as(&sql).bind(&ids).fetch_all(pool).await?;

        for row in product_rows {
            let product = Product::try_from(row)?;
            if let Some(category_id) = product.category_id {
                by_category
                    .entry(category_id.as_i32())
                    .or_default()
                    .push(product);
            }
        }
    }

    rows.into_iter()
        .map(|row| {
            let products = by_category.remove(&row.id).unwrap_or_default();
            row.into_category(products)
        })
        .collect()
}
