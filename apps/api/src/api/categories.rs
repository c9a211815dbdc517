use axum::Router;
use domain_catalog::{PgCategoriesRepository, handlers};
use std::sync::Arc;

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = Arc::new(PgCategoriesRepository::new(state.db.clone()));
    handlers::categories_router(repository)
}
