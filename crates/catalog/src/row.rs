//! Row types decoded from the live store.
//!
//! Enum-like columns are stored as text; decoding parses them and reports
//! unknown values as [`CatalogError::DataCorruption`] rather than panicking.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

use maplecart_core::{Category, CategoryId, Product, ProductId};

use crate::error::CatalogError;

/// Column list shared by every category query.
pub(crate) const CATEGORY_COLUMNS: &str = "id, parent, children, product_type, status";

/// Column list shared by every product query.
pub(crate) const PRODUCT_COLUMNS: &str =
    "id, category_id, name, product_type, price, description, image_url, created_at, updated_at";

#[derive(Debug, FromRow)]
pub(crate) struct CategoryRow {
    pub id: i32,
    pub parent: String,
    pub children: Vec<String>,
    pub product_type: String,
    pub status: String,
}

impl CategoryRow {
    /// Convert the row into a [`Category`], attaching joined products.
    pub(crate) fn into_category(self, products: Vec<Product>) -> Result<Category, CatalogError> {
        Ok(Category {
            id: CategoryId::new(self.id),
            parent: self.parent,
            children: self.children,
            product_type: self
                .product_type
                .parse()
                .map_err(|e| CatalogError::DataCorruption(format!("category {}: {e}", self.id)))?,
            status: self
                .status
                .parse()
                .map_err(|e| CatalogError::DataCorruption(format!("category {}: {e}", self.id)))?,
            products,
        })
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct ProductRow {
    pub id: i32,
    pub category_id: Option<i32>,
    pub name: String,
    pub product_type: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = CatalogError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProductId::new(row.id),
            category_id: row.category_id.map(CategoryId::new),
            name: row.name,
            product_type: row
                .product_type
                .parse()
                .map_err(|e| CatalogError::DataCorruption(format!("product {}: {e}", row.id)))?,
            price: row.price,
            description: row.description,
            image_url: row.image_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
