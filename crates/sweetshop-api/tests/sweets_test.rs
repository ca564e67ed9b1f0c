//! Integration tests for the sweets catalog, run against the in-memory store.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::{Value, json};
use sweetshop_test_support::InMemorySweetRepository;
use uuid::Uuid;

fn names(json: &Value) -> Vec<&str> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_create_then_search_by_lowercase_name() {
    let repo = Arc::new(InMemorySweetRepository::new());
    let id = common::create_sweet(&repo, "Jalebi", "Syrup-Based", 20.0, 30.0).await;

    let (status, json) =
        common::get_json(common::build_test_app(Arc::clone(&repo)), "/search?name=jalebi").await;

    assert_eq!(status, StatusCode::OK);
    let found = json.as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["id"], id);
    assert_eq!(found[0]["name"], "Jalebi");
    assert_eq!(found[0]["category"], "Syrup-Based");
    assert_eq!(found[0]["price"], 20.0);
    assert_eq!(found[0]["quantity"], 30.0);
}

#[tokio::test]
async fn test_created_sweet_appears_exactly_once_in_view_all() {
    let repo = Arc::new(InMemorySweetRepository::new());
    let id = common::create_sweet(&repo, "Barfi", "Milk-Based", 60.0, 8.0).await;

    let (status, json) =
        common::get_json(common::build_test_app(Arc::clone(&repo)), "/view-all").await;

    assert_eq!(status, StatusCode::OK);
    let matching = json
        .as_array()
        .unwrap()
        .iter()
        .filter(|s| s["id"] == id.as_str())
        .count();
    assert_eq!(matching, 1);
}

#[tokio::test]
async fn test_view_all_on_empty_store_returns_empty_array() {
    let app = common::build_test_app(Arc::new(InMemorySweetRepository::new()));

    let (status, json) = common::get_json(app, "/view-all").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn test_create_without_category_returns_missing_fields() {
    let app = common::build_test_app(Arc::new(InMemorySweetRepository::new()));

    let (status, json) =
        common::post_json(app, "/add", &json!({ "name": "X", "price": 10, "quantity": 5 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({ "message": "Missing required fields" }));
}

#[tokio::test]
async fn test_create_duplicate_name_differing_in_case_is_rejected() {
    let repo = Arc::new(InMemorySweetRepository::new());
    common::create_sweet(&repo, "Gulab Jamun", "Milk-Based", 10.0, 50.0).await;

    let (status, json) = common::post_json(
        common::build_test_app(Arc::clone(&repo)),
        "/add",
        &json!({ "name": "GULAB jamun", "category": "Milk-Based", "price": 12, "quantity": 1 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "A sweet with this name already exists");
    assert_eq!(repo.snapshot().len(), 1);
}

#[tokio::test]
async fn test_create_rejects_non_positive_price_and_negative_quantity() {
    let repo = Arc::new(InMemorySweetRepository::new());
    for (price, quantity) in [(0.0, 1.0), (-10.0, 1.0), (10.0, -1.0)] {
        let (status, json) = common::post_json(
            common::build_test_app(Arc::clone(&repo)),
            "/add",
            &json!({ "name": "Edge", "category": "Test", "price": price, "quantity": quantity }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Price and quantity must be positive numbers");
    }
    assert!(repo.snapshot().is_empty());
}

#[tokio::test]
async fn test_create_allows_zero_quantity() {
    let repo = Arc::new(InMemorySweetRepository::new());

    let (status, json) = common::post_json(
        common::build_test_app(Arc::clone(&repo)),
        "/add",
        &json!({ "name": "Sold Out", "category": "Test", "price": 5, "quantity": 0 }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["quantity"], 0.0);
}

#[tokio::test]
async fn test_purchase_more_than_stock_leaves_quantity_unchanged() {
    let repo = Arc::new(InMemorySweetRepository::new());
    let id = common::create_sweet(&repo, "Peda", "Milk-Based", 8.0, 5.0).await;

    let (status, json) = common::post_json(
        common::build_test_app(Arc::clone(&repo)),
        &format!("/purchase/{id}"),
        &json!({ "quantity": 10 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Insufficient stock");
    assert!((repo.snapshot()[0].quantity - 5.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_purchase_entire_stock_leaves_zero() {
    let repo = Arc::new(InMemorySweetRepository::new());
    let id = common::create_sweet(&repo, "Peda", "Milk-Based", 8.0, 5.0).await;

    let (status, json) = common::post_json(
        common::build_test_app(Arc::clone(&repo)),
        &format!("/purchase/{id}"),
        &json!({ "quantity": 5 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Purchase successful");
    assert_eq!(json["sweet"]["quantity"], 0.0);
    assert!(repo.snapshot()[0].quantity.abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_purchase_requires_positive_quantity() {
    let repo = Arc::new(InMemorySweetRepository::new());
    let id = common::create_sweet(&repo, "Peda", "Milk-Based", 8.0, 5.0).await;

    for body in [json!({}), json!({ "quantity": 0 }), json!({ "quantity": -5 })] {
        let (status, json) = common::post_json(
            common::build_test_app(Arc::clone(&repo)),
            &format!("/purchase/{id}"),
            &body,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "A positive purchase quantity is required");
    }
}

#[tokio::test]
async fn test_purchase_unknown_sweet_returns_404() {
    let app = common::build_test_app(Arc::new(InMemorySweetRepository::new()));

    let (status, json) = common::post_json(
        app,
        &format!("/purchase/{}", Uuid::new_v4()),
        &json!({ "quantity": 1 }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Sweet not found");
}

#[tokio::test]
async fn test_restock_unknown_sweet_returns_404() {
    let app = common::build_test_app(Arc::new(InMemorySweetRepository::new()));

    let (status, json) = common::post_json(
        app,
        &format!("/restock/{}", Uuid::new_v4()),
        &json!({ "quantity": 10 }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Sweet not found");
}

#[tokio::test]
async fn test_restock_from_zero_adds_exact_amount() {
    let repo = Arc::new(InMemorySweetRepository::new());
    let id = common::create_sweet(&repo, "Soan Papdi", "Flaky", 12.0, 0.0).await;

    let (status, json) = common::post_json(
        common::build_test_app(Arc::clone(&repo)),
        &format!("/restock/{id}"),
        &json!({ "quantity": 25 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Restock successful");
    assert_eq!(json["sweet"]["quantity"], 25.0);
}

#[tokio::test]
async fn test_restock_malformed_id_returns_500() {
    let app = common::build_test_app(Arc::new(InMemorySweetRepository::new()));

    let (status, json) =
        common::post_json(app, "/restock/not-an-id", &json!({ "quantity": 10 })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "Error processing restock");
}

#[tokio::test]
async fn test_search_price_range_is_boundary_inclusive() {
    let repo = Arc::new(InMemorySweetRepository::new());
    common::create_sweet(&repo, "Rasgulla", "Syrup-Based", 100.0, 1.0).await;
    common::create_sweet(&repo, "Kaju Katli", "Dry-Fruit", 200.0, 1.0).await;

    let (status, json) = common::get_json(
        common::build_test_app(Arc::clone(&repo)),
        "/search?minPrice=100&maxPrice=100",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&json), vec!["Rasgulla"]);
}

#[tokio::test]
async fn test_search_without_parameters_returns_all_by_price() {
    let repo = Arc::new(InMemorySweetRepository::new());
    common::create_sweet(&repo, "Kaju Katli", "Dry-Fruit", 200.0, 1.0).await;
    common::create_sweet(&repo, "Jalebi", "Syrup-Based", 20.0, 1.0).await;
    common::create_sweet(&repo, "Rasgulla", "Syrup-Based", 100.0, 1.0).await;

    let (status, json) =
        common::get_json(common::build_test_app(Arc::clone(&repo)), "/search").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&json), vec!["Jalebi", "Rasgulla", "Kaju Katli"]);
}

#[tokio::test]
async fn test_search_ignores_non_numeric_price_parameters() {
    let repo = Arc::new(InMemorySweetRepository::new());
    common::create_sweet(&repo, "Jalebi", "Syrup-Based", 20.0, 1.0).await;
    common::create_sweet(&repo, "Kaju Katli", "Dry-Fruit", 200.0, 1.0).await;

    let (status, json) = common::get_json(
        common::build_test_app(Arc::clone(&repo)),
        "/search?minPrice=invalid&maxPrice=alsoInvalid&category=Dry-Fruit",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&json), vec!["Kaju Katli"]);
}

#[tokio::test]
async fn test_delete_removes_sweet_from_view_all() {
    let repo = Arc::new(InMemorySweetRepository::new());
    let id = common::create_sweet(&repo, "Ladoo", "Gram-Based", 5.0, 10.0).await;

    let (status, json) =
        common::delete_json(common::build_test_app(Arc::clone(&repo)), &format!("/delete/{id}"))
            .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Sweet deleted successfully");

    let (_, json) = common::get_json(common::build_test_app(Arc::clone(&repo)), "/view-all").await;
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn test_delete_unknown_sweet_returns_404() {
    let app = common::build_test_app(Arc::new(InMemorySweetRepository::new()));

    let (status, json) = common::delete_json(app, &format!("/delete/{}", Uuid::new_v4())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Sweet not found");
}

#[tokio::test]
async fn test_categories_lists_each_category_once() {
    let repo = Arc::new(InMemorySweetRepository::new());
    common::create_sweet(&repo, "Barfi", "Milk-Based", 60.0, 1.0).await;
    common::create_sweet(&repo, "Peda", "Milk-Based", 8.0, 1.0).await;
    common::create_sweet(&repo, "Jalebi", "Syrup-Based", 20.0, 1.0).await;

    let (status, json) =
        common::get_json(common::build_test_app(Arc::clone(&repo)), "/categories").await;

    assert_eq!(status, StatusCode::OK);
    let mut categories: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c.as_str().unwrap())
        .collect();
    categories.sort_unstable();
    assert_eq!(categories, vec!["Milk-Based", "Syrup-Based"]);
}

#[tokio::test]
async fn test_categories_on_empty_store_returns_empty_array() {
    let app = common::build_test_app(Arc::new(InMemorySweetRepository::new()));

    let (status, json) = common::get_json(app, "/categories").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn test_create_returns_fields_exactly_as_submitted() {
    let repo = Arc::new(InMemorySweetRepository::new());
    let body = json!({ "name": "  Ladoo ", "category": " Gram ", "price": 5, "quantity": 10 });

    let (status, json) =
        common::post_json(common::build_test_app(Arc::clone(&repo)), "/add", &body).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["name"], "  Ladoo ");
    assert_eq!(json["category"], " Gram ");
    assert_eq!(json["price"], 5.0);
    assert_eq!(json["quantity"], 10.0);
    assert_eq!(repo.snapshot()[0].name, "  Ladoo ");
}

#[tokio::test]
async fn test_purchase_without_body_reports_missing_quantity_as_json() {
    let repo = Arc::new(InMemorySweetRepository::new());
    let id = common::create_sweet(&repo, "Peda", "Milk-Based", 8.0, 5.0).await;

    let (status, bytes) = common::send(
        common::build_test_app(Arc::clone(&repo)),
        "POST",
        &format!("/purchase/{id}"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json, json!({ "message": "A positive purchase quantity is required" }));
}

#[tokio::test]
async fn test_restock_overflow_returns_500() {
    let repo = Arc::new(InMemorySweetRepository::new());
    let id = common::create_sweet(&repo, "Ladoo", "Gram-Based", 5.0, 1e308).await;

    let (status, json) = common::post_json(
        common::build_test_app(Arc::clone(&repo)),
        &format!("/restock/{id}"),
        &json!({ "quantity": 1e308 }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "Error processing restock");
    assert!(repo.snapshot()[0].quantity.is_finite());
}
