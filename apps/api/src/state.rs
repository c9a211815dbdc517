//! Shared application state passed to request handlers.

/// Cloned per handler; the database connection pool is an inexpensive
/// Arc clone.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: database::postgres::DatabaseConnection,
}
