//! Category administration handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use maplecart_core::{Category, CategoryId, CategoryPatch, NewCategory};

use crate::error::Result;
use crate::state::AppState;

/// List every category, hidden ones included.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let categories = state.catalog().all_categories().await?;
    Ok(Json(categories))
}

/// Show a single category.
///
/// Responds with the record or a JSON `null`, mirroring the by-id read
/// contract.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Option<Category>>> {
    let category = state.catalog().category_by_id(CategoryId::new(id)).await?;
    Ok(Json(category))
}

/// Create a category.
#[instrument(skip(state, payload), fields(parent = %payload.parent))]
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewCategory>,
) -> Result<(StatusCode, Json<Category>)> {
    let category = state.catalog().create_category(&payload).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Replace the entire catalog with the given set.
///
/// An empty payload empties the catalog.
#[instrument(skip(state, payload), fields(count = payload.len()))]
pub async fn bulk_replace(
    State(state): State<AppState>,
    Json(payload): Json<Vec<NewCategory>>,
) -> Result<Json<Vec<Category>>> {
    let categories = state.catalog().bulk_replace_categories(&payload).await?;
    Ok(Json(categories))
}

/// Apply a partial update to a category.
///
/// Responds 404 if the id does not exist; nothing is mutated in that case.
#[instrument(skip(state, payload))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CategoryPatch>,
) -> Result<Json<Category>> {
    let category = state
        .catalog()
        .update_category(CategoryId::new(id), &payload)
        .await?;
    Ok(Json(category))
}

/// Delete a category.
///
/// Responds with the deleted record, or a JSON `null` if it was absent.
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Option<Category>>> {
    let deleted = state.catalog().delete_category(CategoryId::new(id)).await?;
    Ok(Json(deleted))
}
