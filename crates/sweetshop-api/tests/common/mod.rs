//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use sweetshop_test_support::InMemorySweetRepository;
use tower::ServiceExt;

use sweetshop_api::state::AppState;

/// Build the full app router over `repo`. Uses the same route structure as
/// `main.rs`.
pub fn build_test_app(repo: Arc<InMemorySweetRepository>) -> Router {
    sweetshop_api::app(AppState::new(repo))
}

/// Send a request with an optional JSON body and return the raw response
/// parts.
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<&serde_json::Value>,
) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, body_bytes.to_vec())
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let (status, bytes) = send(app, "POST", uri, Some(body)).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, bytes) = send(app, "GET", uri, None).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Send a DELETE request and return the response.
pub async fn delete_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, bytes) = send(app, "DELETE", uri, None).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Create a sweet through the API and return its identifier.
pub async fn create_sweet(
    repo: &Arc<InMemorySweetRepository>,
    name: &str,
    category: &str,
    price: f64,
    quantity: f64,
) -> String {
    let (status, json) = post_json(
        build_test_app(Arc::clone(repo)),
        "/add",
        &serde_json::json!({
            "name": name,
            "category": category,
            "price": price,
            "quantity": quantity
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {json}");
    json["id"].as_str().unwrap().to_owned()
}
