use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::ErrorResponse;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CatalogResult;
use crate::models::{
    CategoryResponseModel, ProductResponseModel, ProductsListResponseModel, Response,
    ResponseStatus,
};
use crate::repository::CategoriesRepository;
use crate::repository::ProductsRepository;
use crate::service::ProductsService;

const PRODUCTS_TAG: &str = "products";
const CATEGORIES_TAG: &str = "categories";

/// OpenAPI documentation for the products endpoints
#[derive(OpenApi)]
#[openapi(
    paths(get_products, get_product),
    components(schemas(
        Response<ProductResponseModel>,
        Response<ProductsListResponseModel>,
        ProductResponseModel,
        ProductsListResponseModel,
    )),
    tags(
        (name = PRODUCTS_TAG, description = "Product retrieval endpoints")
    )
)]
pub struct ProductsApiDoc;

/// OpenAPI documentation for the categories endpoints
#[derive(OpenApi)]
#[openapi(
    paths(get_categories),
    components(schemas(CategoryResponseModel, ErrorResponse)),
    tags(
        (name = CATEGORIES_TAG, description = "Category retrieval endpoints")
    )
)]
pub struct CategoriesApiDoc;

/// Envelope status drives the transport status: Ok is 200, NotFound is
/// 404 and Error is 500. The envelope body is returned in all cases.
impl<T: serde::Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> axum::response::Response {
        let status = match self.status {
            ResponseStatus::Ok => StatusCode::OK,
            ResponseStatus::NotFound => StatusCode::NOT_FOUND,
            ResponseStatus::Error => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(self)).into_response()
    }
}

/// Create the products router with all HTTP endpoints
pub fn products_router<R: ProductsRepository + 'static>(service: ProductsService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(get_products))
        .route("/{id}", get(get_product))
        .with_state(shared_service)
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = PRODUCTS_TAG,
    responses(
        (status = 200, description = "Envelope with all products", body = Response<ProductsListResponseModel>),
        (status = 500, description = "Envelope with the generic retrieval error", body = Response<ProductsListResponseModel>)
    )
)]
async fn get_products<R: ProductsRepository>(
    State(service): State<Arc<ProductsService<R>>>,
) -> Response<ProductsListResponseModel> {
    service.get_all().await
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = PRODUCTS_TAG,
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Envelope with the product", body = Response<ProductResponseModel>),
        (status = 404, description = "Envelope with the not-found message", body = Response<ProductResponseModel>),
        (status = 500, description = "Envelope with the generic retrieval error", body = Response<ProductResponseModel>)
    )
)]
async fn get_product<R: ProductsRepository>(
    State(service): State<Arc<ProductsService<R>>>,
    Path(id): Path<i32>,
) -> Response<ProductResponseModel> {
    service.get(id).await
}

/// Create the categories router.
///
/// Categories are read straight from the repository, with no envelope
/// or service layer in between.
pub fn categories_router<R: CategoriesRepository + 'static>(repository: Arc<R>) -> Router {
    Router::new()
        .route("/", get(get_categories))
        .with_state(repository)
}

/// List all categories
#[utoipa::path(
    get,
    path = "",
    tag = CATEGORIES_TAG,
    responses(
        (status = 200, description = "All categories", body = Vec<CategoryResponseModel>),
        (status = 500, description = "Storage fault", body = ErrorResponse)
    )
)]
async fn get_categories<R: CategoriesRepository>(
    State(repository): State<Arc<R>>,
) -> CatalogResult<Json<Vec<CategoryResponseModel>>> {
    let categories = repository.get_all().await?;
    Ok(Json(categories.iter().map(Into::into).collect()))
}
