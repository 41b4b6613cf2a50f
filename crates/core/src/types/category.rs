//! Catalog category entity and its status/type enums.
//!
//! Categories are the unit of storefront navigation: a parent name with a
//! list of child subcategory names, grouped under one of the four product
//! types. The same shape is used for live database rows and for the bundled
//! fallback dataset (which is why `id` also accepts the `_id` key).

use serde::{Deserialize, Serialize};

use super::id::CategoryId;
use super::product::Product;

/// Storefront visibility status for a category.
///
/// Only `Show` categories are returned by public listing calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryStatus {
    #[default]
    Show,
    Hide,
}

impl CategoryStatus {
    /// The canonical string form stored in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Show => "Show",
            Self::Hide => "Hide",
        }
    }
}

impl std::fmt::Display for CategoryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`CategoryStatus`] from its string form.
#[derive(Debug, thiserror::Error)]
#[error("invalid category status: {0}")]
pub struct ParseCategoryStatusError(String);

impl std::str::FromStr for CategoryStatus {
    type Err = ParseCategoryStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Show" => Ok(Self::Show),
            "Hide" => Ok(Self::Hide),
            other => Err(ParseCategoryStatusError(other.to_string())),
        }
    }
}

/// Product type a category (or product) belongs to.
///
/// Matching on product type is exact and case-sensitive; the lowercase
/// strings below are the only valid forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Electronics,
    Fashion,
    Beauty,
    Jewelry,
}

impl ProductType {
    /// The canonical string form stored in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Electronics => "electronics",
            Self::Fashion => "fashion",
            Self::Beauty => "beauty",
            Self::Jewelry => "jewelry",
        }
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`ProductType`] from its string form.
#[derive(Debug, thiserror::Error)]
#[error("invalid product type: {0}")]
pub struct ParseProductTypeError(String);

impl std::str::FromStr for ProductType {
    type Err = ParseProductTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "electronics" => Ok(Self::Electronics),
            "fashion" => Ok(Self::Fashion),
            "beauty" => Ok(Self::Beauty),
            "jewelry" => Ok(Self::Jewelry),
            other => Err(ParseProductTypeError(other.to_string())),
        }
    }
}

/// A catalog category.
///
/// `products` is populated by live reads that join referenced products;
/// fallback-dataset categories always carry an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(alias = "_id")]
    pub id: CategoryId,
    /// Parent (display) name of the category.
    pub parent: String,
    /// Child subcategory names, in display order.
    #[serde(default)]
    pub children: Vec<String>,
    pub product_type: ProductType,
    pub status: CategoryStatus,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Payload for creating a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub parent: String,
    #[serde(default)]
    pub children: Vec<String>,
    pub product_type: ProductType,
    #[serde(default)]
    pub status: CategoryStatus,
}

/// Partial update payload for a category.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryPatch {
    pub parent: Option<String>,
    pub children: Option<Vec<String>>,
    pub product_type: Option<ProductType>,
    pub status: Option<CategoryStatus>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        assert_eq!("Show".parse::<CategoryStatus>().unwrap(), CategoryStatus::Show);
        assert_eq!("Hide".parse::<CategoryStatus>().unwrap(), CategoryStatus::Hide);
        assert!("show".parse::<CategoryStatus>().is_err());
    }

    #[test]
    fn test_product_type_is_case_sensitive() {
        assert_eq!("beauty".parse::<ProductType>().unwrap(), ProductType::Beauty);
        assert!("Beauty".parse::<ProductType>().is_err());
        assert!("BEAUTY".parse::<ProductType>().is_err());
    }

    #[test]
    fn test_category_accepts_underscore_id_key() {
        // The bundled fallback dataset uses the `_id` key
        let json = r#"{
            "_id": 3,
            "parent": "Skincare",
            "children": ["Moisturizers"],
            "productType": "beauty",
            "status": "Show"
        }"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.id, CategoryId::new(3));
        assert_eq!(category.product_type, ProductType::Beauty);
        assert!(category.products.is_empty());
    }

    #[test]
    fn test_category_serializes_camel_case() {
        let category = Category {
            id: CategoryId::new(1),
            parent: "Phones".to_string(),
            children: vec!["Smartphones".to_string()],
            product_type: ProductType::Electronics,
            status: CategoryStatus::Show,
            products: Vec::new(),
        };
        let value = serde_json::to_value(&category).unwrap();
        assert_eq!(value["productType"], "electronics");
        assert_eq!(value["status"], "Show");
    }
}
