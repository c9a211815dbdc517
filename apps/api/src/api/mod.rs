use axum::Router;

pub mod categories;
pub mod health;
pub mod products;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by the `create_router` helper.
///
/// Returns a stateless Router: all sub-routers have state already
/// applied, so only cheap Arc clones remain.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .nest("/products", products::router(state))
        .nest("/categories", categories::router(state))
}

/// Creates a router with the /ready endpoint that performs actual health checks.
///
/// Merged with the stateless app router from `create_router`; the /ready
/// endpoint checks the database connection.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
