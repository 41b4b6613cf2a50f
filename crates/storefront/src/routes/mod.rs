//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                    - Liveness check
//! GET  /health/ready              - Readiness check (live store probe)
//!
//! # Categories
//! GET  /categories                - Publicly visible categories
//! GET  /categories/type/{type}    - Categories of one product type
//! GET  /categories/{id}           - Category detail
//!
//! # Shipping
//! GET  /shipping/quote            - Delivery charge for a subtotal/option
//! ```

pub mod categories;
pub mod shipping;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the category routes router.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::index))
        .route("/type/{product_type}", get(categories::by_type))
        .route("/{id}", get(categories::show))
}

/// Create the shipping routes router.
pub fn shipping_routes() -> Router<AppState> {
    Router::new().route("/quote", get(shipping::quote))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", category_routes())
        .nest("/shipping", shipping_routes())
}
