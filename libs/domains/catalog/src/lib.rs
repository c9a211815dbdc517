//! Catalog Domain
//!
//! Products and categories exposed over HTTP, backed by PostgreSQL.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Envelope policy, logging
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, envelope
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{
//!     handlers,
//!     repository::InMemoryCatalogRepository,
//!     service::ProductsService,
//! };
//!
//! let repository = InMemoryCatalogRepository::new();
//! let service = ProductsService::new(repository);
//! let router = handlers::products_router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{CatalogError, CatalogResult};
pub use models::{
    Category, CategoryResponseModel, CreateProduct, Product, ProductResponseModel,
    ProductsListResponseModel, Response, ResponseStatus,
};
pub use postgres::{PgCategoriesRepository, PgProductsRepository};
pub use repository::{CategoriesRepository, InMemoryCatalogRepository, ProductsRepository};
pub use service::ProductsService;
