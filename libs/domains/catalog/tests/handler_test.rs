//! Handler tests for the catalog domain
//!
//! These verify the HTTP layer against the in-memory repository:
//! response serialization, envelope contents and status code mapping.
//! They test ONLY the domain routers, not the full application.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_catalog::*;
use http_body_util::BodyExt;
use rust_decimal::dec;
use sea_orm::DbErr;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn seeded_repo() -> InMemoryCatalogRepository {
    let repo = InMemoryCatalogRepository::new();
    repo.add_category("Food").await;
    repo.add_category("Electronics").await;
    repo.add_category("Cosmetics").await;

    repo.insert(CreateProduct {
        name: "Tea".to_string(),
        is_available: true,
        price: dec!(19.99),
        category_id: 1,
    })
    .await
    .unwrap();

    repo.insert(CreateProduct {
        name: "Cream".to_string(),
        is_available: false,
        price: dec!(100.01),
        category_id: 3,
    })
    .await
    .unwrap();

    repo
}

fn products_app(repo: InMemoryCatalogRepository) -> axum::Router {
    handlers::products_router(ProductsService::new(repo))
}

/// Repository stub whose every call fails with a storage fault.
struct FailingRepository;

#[async_trait]
impl ProductsRepository for FailingRepository {
    async fn get_by_id(&self, _id: i32) -> CatalogResult<Option<Product>> {
        Err(CatalogError::Database(DbErr::Custom(
            "connection reset".to_string(),
        )))
    }

    async fn get_all(&self) -> CatalogResult<Vec<Product>> {
        Err(CatalogError::Database(DbErr::Custom(
            "connection reset".to_string(),
        )))
    }

    async fn insert(&self, _input: CreateProduct) -> CatalogResult<Product> {
        Err(CatalogError::Database(DbErr::Custom(
            "connection reset".to_string(),
        )))
    }

    async fn most_frequent_category_name(&self) -> CatalogResult<Option<String>> {
        Err(CatalogError::Database(DbErr::Custom(
            "connection reset".to_string(),
        )))
    }
}

#[tokio::test]
async fn test_get_product_returns_200_with_ok_envelope() {
    let app = products_app(seeded_repo().await);

    let request = Request::builder().uri("/1").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], "Ok");
    assert!(body["errorMessage"].is_null());
    assert_eq!(body["data"]["name"], "Tea");
    assert_eq!(body["data"]["isAvailable"], true);
    assert_eq!(body["data"]["categoryName"], "Food");
}

#[tokio::test]
async fn test_get_missing_product_returns_404_with_not_found_envelope() {
    let app = products_app(seeded_repo().await);

    let request = Request::builder().uri("/999").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], "NotFound");
    assert_eq!(body["errorMessage"], "product not found in database");
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn test_get_product_with_non_numeric_id_returns_400() {
    let app = products_app(seeded_repo().await);

    let request = Request::builder()
        .uri("/abc")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    // Path type coercion rejects before the handler runs.
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_products_returns_200_with_list_envelope() {
    let app = products_app(seeded_repo().await);

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], "Ok");
    let products = body["data"]["products"].as_array().unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[1]["categoryName"], "Cosmetics");
}

#[tokio::test]
async fn test_get_products_on_empty_table_returns_200_with_empty_list() {
    let repo = InMemoryCatalogRepository::new();
    let app = products_app(repo);

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], "Ok");
    assert_eq!(body["data"]["products"], serde_json::json!([]));
}

#[tokio::test]
async fn test_repository_fault_returns_500_with_error_envelope() {
    let app = handlers::products_router(ProductsService::new(FailingRepository));

    let request = Request::builder().uri("/1").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], "Error");
    assert_eq!(body["errorMessage"], "error while retrieving entity");
    assert!(body["data"].is_null());
    // No fault detail leaks to the client.
    assert!(!body.to_string().contains("connection reset"));
}

#[tokio::test]
async fn test_get_categories_returns_200_with_plain_list() {
    let repo = Arc::new(seeded_repo().await);
    let app = handlers::categories_router(repo);

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    let categories = body.as_array().unwrap();
    assert_eq!(categories.len(), 3);
    assert_eq!(categories[0]["name"], "Food");
    assert_eq!(categories[2]["name"], "Cosmetics");
}
