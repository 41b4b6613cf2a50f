//! HTTP route handlers for the admin API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                  - Liveness check
//! GET    /health/ready            - Readiness check (live store probe)
//!
//! # Categories
//! GET    /categories              - All categories, unfiltered
//! POST   /categories              - Create a category
//! PUT    /categories/bulk         - Replace the entire catalog
//! GET    /categories/{id}         - Category detail
//! PATCH  /categories/{id}         - Partial update (404 if absent)
//! DELETE /categories/{id}         - Delete; body is the deleted record or null
//!
//! # Products
//! GET    /products                - All products
//! POST   /products                - Create a product
//! GET    /products/{id}           - Product detail
//! PATCH  /products/{id}           - Partial update (404 if absent)
//! DELETE /products/{id}           - Delete; body is the deleted record or null
//!
//! # Settings
//! GET    /settings/shipping       - Shipping settings snapshot
//! PUT    /settings/shipping       - Replace the shipping settings
//! ```

pub mod categories;
pub mod products;
pub mod settings;

use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

/// Create the category routes router.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::index).post(categories::create))
        .route("/bulk", put(categories::bulk_replace))
        .route(
            "/{id}",
            get(categories::show)
                .patch(categories::update)
                .delete(categories::delete),
        )
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route(
            "/{id}",
            get(products::show)
                .patch(products::update)
                .delete(products::delete),
        )
}

/// Create the settings routes router.
pub fn settings_routes() -> Router<AppState> {
    Router::new().route(
        "/shipping",
        get(settings::show_shipping).put(settings::update_shipping),
    )
}

/// Create all routes for the admin API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", category_routes())
        .nest("/products", product_routes())
        .nest("/settings", settings_routes())
}
