use axum::Router;
use domain_catalog::{PgProductsRepository, ProductsService, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgProductsRepository::new(state.db.clone());
    let service = ProductsService::new(repository);
    handlers::products_router(service)
}
