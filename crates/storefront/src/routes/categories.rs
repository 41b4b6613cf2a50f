//! Category route handlers.
//!
//! All reads go through the catalog service, which transparently serves the
//! bundled fallback dataset while the live store is down.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use maplecart_core::{Category, CategoryId, ProductType};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// List publicly visible categories.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let categories = state.catalog().show_categories().await?;
    Ok(Json(categories))
}

/// List categories of one product type.
///
/// An unknown type matches nothing and returns an empty list, mirroring the
/// exact-match filter semantics.
#[instrument(skip(state))]
pub async fn by_type(
    State(state): State<AppState>,
    Path(product_type): Path<String>,
) -> Result<Json<Vec<Category>>> {
    let Ok(product_type) = product_type.parse::<ProductType>() else {
        return Ok(Json(Vec::new()));
    };

    let categories = state.catalog().categories_by_type(product_type).await?;
    Ok(Json(categories))
}

/// Show a single category.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Category>> {
    let id = CategoryId::new(id);
    let category = state
        .catalog()
        .category_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category not found: {id}")))?;
    Ok(Json(category))
}
