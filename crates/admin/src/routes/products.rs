//! Product administration handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use maplecart_catalog::ProductRepository;
use maplecart_core::{NewProduct, Product, ProductId, ProductPatch};

use crate::error::Result;
use crate::state::AppState;

/// List every product.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool()).list().await?;
    Ok(Json(products))
}

/// Show a single product, or a JSON `null` if absent.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Option<Product>>> {
    let product = ProductRepository::new(state.pool())
        .get(ProductId::new(id))
        .await?;
    Ok(Json(product))
}

/// Create a product.
#[instrument(skip(state, payload), fields(name = %payload.name))]
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewProduct>,
) -> Result<(StatusCode, Json<Product>)> {
    let product = ProductRepository::new(state.pool()).create(&payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Apply a partial update to a product.
///
/// Responds 404 if the id does not exist; nothing is mutated in that case.
#[instrument(skip(state, payload))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ProductPatch>,
) -> Result<Json<Product>> {
    let product = ProductRepository::new(state.pool())
        .update(ProductId::new(id), &payload)
        .await?;
    Ok(Json(product))
}

/// Delete a product.
///
/// Responds with the deleted record, or a JSON `null` if it was absent.
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Option<Product>>> {
    let deleted = ProductRepository::new(state.pool())
        .delete(ProductId::new(id))
        .await?;
    Ok(Json(deleted))
}
