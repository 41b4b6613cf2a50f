//! Integration tests for the admin API.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The admin server running (cargo run -p maplecart-admin)
//!
//! They mutate the catalog; do not point them at real data.
//!
//! Run with: cargo test -p maplecart-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};

use maplecart_integration_tests::{admin_base_url, client};

/// Test helper: create a category and return it.
async fn create_category(parent: &str, product_type: &str, status: &str) -> Value {
    let resp = client()
        .post(format!("{}/categories", admin_base_url()))
        .json(&json!({
            "parent": parent,
            "children": ["One", "Two"],
            "productType": product_type,
            "status": status
        }))
        .send()
        .await
        .expect("Failed to create category");

    assert_eq!(resp.status(), StatusCode::CREATED);
    resp.json().await.expect("Create response is not JSON")
}

// ============================================================================
// Category CRUD Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_create_and_fetch_category() {
    let created = create_category("Integration Fixtures", "fashion", "Hide").await;
    let id = created["id"].as_i64().expect("Created category has no id");

    let fetched: Value = client()
        .get(format!("{}/categories/{id}", admin_base_url()))
        .send()
        .await
        .expect("Failed to fetch category")
        .json()
        .await
        .expect("Response is not JSON");

    assert_eq!(fetched["parent"], "Integration Fixtures");
    assert_eq!(fetched["productType"], "fashion");

    // Cleanup
    let _ = client()
        .delete(format!("{}/categories/{id}", admin_base_url()))
        .send()
        .await;
}

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_update_category_applies_partial_patch() {
    let created = create_category("Patch Target", "beauty", "Hide").await;
    let id = created["id"].as_i64().expect("Created category has no id");

    let resp = client()
        .patch(format!("{}/categories/{id}", admin_base_url()))
        .json(&json!({"status": "Show"}))
        .send()
        .await
        .expect("Failed to patch category");

    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = resp.json().await.expect("Patch response is not JSON");

    // Patched field changed, the rest kept
    assert_eq!(updated["status"], "Show");
    assert_eq!(updated["parent"], "Patch Target");
    assert_eq!(updated["productType"], "beauty");

    let _ = client()
        .delete(format!("{}/categories/{id}", admin_base_url()))
        .send()
        .await;
}

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_update_missing_category_is_404() {
    let resp = client()
        .patch(format!("{}/categories/999999", admin_base_url()))
        .json(&json!({"status": "Show"}))
        .send()
        .await
        .expect("Failed to patch category");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_delete_missing_category_returns_null() {
    let resp = client()
        .delete(format!("{}/categories/999999", admin_base_url()))
        .send()
        .await
        .expect("Failed to delete category");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Delete response is not JSON");
    assert!(body.is_null());
}

#[tokio::test]
#[ignore = "Requires running admin server and database; replaces the whole catalog"]
async fn test_bulk_replace_with_empty_set_empties_catalog() {
    let base_url = admin_base_url();

    let resp = client()
        .put(format!("{base_url}/categories/bulk"))
        .json(&json!([]))
        .send()
        .await
        .expect("Failed to bulk replace");
    assert_eq!(resp.status(), StatusCode::OK);

    let categories: Vec<Value> = client()
        .get(format!("{base_url}/categories"))
        .send()
        .await
        .expect("Failed to list categories")
        .json()
        .await
        .expect("Response is not JSON");
    assert!(categories.is_empty());
}

#[tokio::test]
#[ignore = "Requires running admin server and database; replaces the whole catalog"]
async fn test_bulk_replace_installs_new_set_in_order() {
    let base_url = admin_base_url();

    let resp = client()
        .put(format!("{base_url}/categories/bulk"))
        .json(&json!([
            {"parent": "First", "children": [], "productType": "electronics", "status": "Show"},
            {"parent": "Second", "children": [], "productType": "jewelry", "status": "Hide"}
        ]))
        .send()
        .await
        .expect("Failed to bulk replace");
    assert_eq!(resp.status(), StatusCode::OK);

    let installed: Vec<Value> = resp.json().await.expect("Response is not JSON");
    assert_eq!(installed.len(), 2);
    assert_eq!(installed[0]["parent"], "First");
    assert_eq!(installed[1]["parent"], "Second");
}

// ============================================================================
// Product CRUD Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_product_crud_roundtrip() {
    let base_url = admin_base_url();

    let resp = client()
        .post(format!("{base_url}/products"))
        .json(&json!({
            "name": "Fixture Lipstick",
            "productType": "beauty",
            "price": "12.50"
        }))
        .send()
        .await
        .expect("Failed to create product");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = resp.json().await.expect("Create response is not JSON");
    let id = created["id"].as_i64().expect("Created product has no id");

    let resp = client()
        .patch(format!("{base_url}/products/{id}"))
        .json(&json!({"price": "14.00"}))
        .send()
        .await
        .expect("Failed to patch product");
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = resp.json().await.expect("Patch response is not JSON");
    assert_eq!(updated["price"], "14.00");
    assert_eq!(updated["name"], "Fixture Lipstick");

    let resp = client()
        .delete(format!("{base_url}/products/{id}"))
        .send()
        .await
        .expect("Failed to delete product");
    assert_eq!(resp.status(), StatusCode::OK);
    let deleted: Value = resp.json().await.expect("Delete response is not JSON");
    assert_eq!(deleted["id"], id);
}

// ============================================================================
// Settings Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_shipping_settings_roundtrip() {
    let base_url = admin_base_url();
    let settings = json!({
        "freeShippingMinSubtotal": 200,
        "deliveryChargeStandard": 20,
        "deliveryChargeExpress": 60,
        "shippingCostTiers": [
            {"option": "STANDARD", "minSubtotal": 0, "maxSubtotal": 100, "cost": 10}
        ]
    });

    let resp = client()
        .put(format!("{base_url}/settings/shipping"))
        .json(&settings)
        .send()
        .await
        .expect("Failed to update settings");
    assert_eq!(resp.status(), StatusCode::OK);

    let stored: Value = client()
        .get(format!("{base_url}/settings/shipping"))
        .send()
        .await
        .expect("Failed to fetch settings")
        .json()
        .await
        .expect("Settings response is not JSON");

    assert_eq!(stored["freeShippingMinSubtotal"], json!(200));
    assert_eq!(stored["shippingCostTiers"][0]["cost"], json!(10));
}
