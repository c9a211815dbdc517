use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Product and category catalog over PostgreSQL"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/products", api = domain_catalog::handlers::ProductsApiDoc),
        (path = "/categories", api = domain_catalog::handlers::CategoriesApiDoc)
    )
)]
pub struct ApiDoc;
