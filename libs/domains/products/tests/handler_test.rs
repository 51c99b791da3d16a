//! Handler tests for Products domain
//!
//! These drive `handlers::router` directly with an in-memory repository,
//! checking status codes and the exact response bodies of each route.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn text_body(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn app(repo: InMemoryProductRepository) -> Router {
    handlers::router(ProductService::new(repo))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Store whose every call fails like a dropped database connection
struct FailingRepository;

#[async_trait]
impl ProductRepository for FailingRepository {
    async fn create(&self, _product: Product) -> ProductResult<Product> {
        Err(ProductError::Database("connection refused".to_string()))
    }

    async fn update(&self, _id: String, _changes: Product) -> ProductResult<Option<Product>> {
        Err(ProductError::Database("connection refused".to_string()))
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        Err(ProductError::Database("connection refused".to_string()))
    }

    async fn exists(&self, _id: String) -> ProductResult<bool> {
        Err(ProductError::Database("connection refused".to_string()))
    }
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn test_update_unknown_id_returns_404_with_submitted_body() {
    let submitted = json!({ "id": "p-9", "name": "Lamp", "price": "300", "purchased": false });

    let response = app(InMemoryProductRepository::new())
        .oneshot(json_request("PUT", "/update?id=p-9", submitted.clone()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, submitted);
}

#[tokio::test]
async fn test_update_existing_id_echoes_request_not_stored_entity() {
    let repo = InMemoryProductRepository::with_products(vec![Product::new(
        "p-1", "Lamp", "300", false,
    )]);

    // Body id differs from the query id; the store keeps "p-1"
    let submitted = json!({ "id": "other", "name": "Desk lamp", "price": "350", "purchased": true });

    let response = app(repo.clone())
        .oneshot(json_request("PUT", "/update?id=p-1", submitted.clone()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, submitted);

    let stored = repo.list().await.unwrap();
    assert_eq!(stored, vec![Product::new("p-1", "Desk lamp", "350", true)]);
}

#[tokio::test]
async fn test_update_store_failure_returns_500_with_placeholder() {
    let app = handlers::router(ProductService::new(FailingRepository));

    let response = app
        .oneshot(json_request(
            "PUT",
            "/update?id=p-1",
            json!({ "id": "p-1", "name": "Lamp", "price": "300", "purchased": false }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Product = json_body(response.into_body()).await;
    assert_eq!(body, Product::default());
}

#[tokio::test]
async fn test_update_without_id_is_rejected() {
    let response = app(InMemoryProductRepository::new())
        .oneshot(json_request(
            "PUT",
            "/update",
            json!({ "id": "p-1", "name": "Lamp", "price": "300", "purchased": false }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "QUERY_EXTRACTION");
    assert_eq!(body["code"], 1012);
}

#[tokio::test]
async fn test_update_with_numeric_price_stores_text() {
    let repo = InMemoryProductRepository::with_products(vec![Product::new(
        "p-1", "Lamp", "300", false,
    )]);

    let response = app(repo.clone())
        .oneshot(json_request(
            "PUT",
            "/update?id=p-1",
            json!({ "id": "p-1", "name": "Lamp", "price": 350, "purchased": true }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["price"], "350");

    let stored = repo.list().await.unwrap();
    assert_eq!(stored, vec![Product::new("p-1", "Lamp", "350", true)]);
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_create_returns_201_and_confirmation() {
    let repo = InMemoryProductRepository::new();

    let response = app(repo.clone())
        .oneshot(json_request(
            "POST",
            "/create",
            json!({ "id": "p-1", "name": "Lamp", "price": "300", "purchased": false }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()["content-type"], "text/plain; charset=utf-8");
    assert_eq!(text_body(response.into_body()).await, "product created");

    assert!(repo.exists("p-1".to_string()).await.unwrap());
}

#[tokio::test]
async fn test_create_duplicate_returns_400_and_error_message() {
    let repo = InMemoryProductRepository::with_products(vec![Product::new(
        "p-1", "Lamp", "300", false,
    )]);

    let response = app(repo)
        .oneshot(json_request(
            "POST",
            "/create",
            json!({ "id": "p-1", "name": "Other lamp", "price": "10", "purchased": false }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(text_body(response.into_body()).await, "could not save product");
}

#[tokio::test]
async fn test_create_store_failure_returns_500_and_error_message() {
    let app = handlers::router(ProductService::new(FailingRepository));

    let response = app
        .oneshot(json_request(
            "POST",
            "/create",
            json!({ "id": "p-1", "name": "Lamp", "price": "300", "purchased": false }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(text_body(response.into_body()).await, "could not save product");
}

#[tokio::test]
async fn test_create_with_numeric_price_is_accepted() {
    let repo = InMemoryProductRepository::new();

    let response = app(repo.clone())
        .oneshot(json_request(
            "POST",
            "/create",
            json!({ "id": "p", "price": 300 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        repo.list().await.unwrap(),
        vec![Product::new("p", "", "300", false)]
    );
}

#[tokio::test]
async fn test_create_malformed_json_returns_400_error_response() {
    let request = Request::builder()
        .method("POST")
        .uri("/create")
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let response = app(InMemoryProductRepository::new())
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "JSON_EXTRACTION");
}

#[tokio::test]
async fn test_create_type_mismatch_returns_400_error_response() {
    let repo = InMemoryProductRepository::new();

    let response = app(repo.clone())
        .oneshot(json_request(
            "POST",
            "/create",
            json!({ "id": "p-1", "purchased": "yes" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()["content-type"], "application/json");
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["code"], 1003);
    assert_eq!(body["error"], "JSON_EXTRACTION");
    assert!(body["message"].as_str().unwrap().contains("purchased"));

    assert!(!repo.exists("p-1".to_string()).await.unwrap());
}

// ============================================================================
// List
// ============================================================================

#[tokio::test]
async fn test_list_empty_returns_404_and_empty_array() {
    let response = app(InMemoryProductRepository::new())
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_list_returns_all_products_in_service_order() {
    let repo = InMemoryProductRepository::with_products(vec![
        Product::new("p-2", "Chair", "40", false),
        Product::new("p-1", "Lamp", "300", true),
    ]);

    let response = app(repo)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(
        body,
        json!([
            { "id": "p-2", "name": "Chair", "price": "40", "purchased": false },
            { "id": "p-1", "name": "Lamp", "price": "300", "purchased": true }
        ])
    );
}

#[tokio::test]
async fn test_list_store_failure_returns_500_error_response() {
    let app = handlers::router(ProductService::new(FailingRepository));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn test_create_then_list_round_trip() {
    let repo = InMemoryProductRepository::new();

    for (id, name) in [("p-1", "Lamp"), ("p-2", "Chair")] {
        let response = app(repo.clone())
            .oneshot(json_request(
                "POST",
                "/create",
                json!({ "id": id, "name": name, "price": "1", "purchased": false }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app(repo)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let products: Vec<Product> = json_body(response.into_body()).await;
    let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Lamp", "Chair"]);
}
