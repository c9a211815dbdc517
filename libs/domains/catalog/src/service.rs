use std::sync::Arc;

use crate::models::{ProductResponseModel, ProductsListResponseModel, Response};
use crate::repository::ProductsRepository;

/// Client-facing message for a missing product.
pub const NOT_FOUND_MESSAGE: &str = "product not found in database";

/// Client-facing message for any repository fault. The fault detail is
/// logged server-side and never surfaced.
pub const RETRIEVAL_ERROR_MESSAGE: &str = "error while retrieving entity";

/// Service layer wrapping repository calls in a uniform result envelope.
///
/// Every call resolves to a [`Response`]; repository faults never escape
/// as errors, they become `Error` envelopes with a constant message.
#[derive(Clone)]
pub struct ProductsService<R: ProductsRepository> {
    repository: Arc<R>,
}

impl<R: ProductsRepository> ProductsService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Get a single product by id.
    pub async fn get(&self, id: i32) -> Response<ProductResponseModel> {
        tracing::info!(product_id = id, "Fetching product from database");

        match self.repository.get_by_id(id).await {
            Ok(Some(product)) => Response::ok((&product).into()),
            Ok(None) => {
                tracing::info!(product_id = id, "Product not found");
                Response::not_found(NOT_FOUND_MESSAGE)
            }
            Err(e) => {
                tracing::error!(product_id = id, error = ?e, "Failed to retrieve product");
                Response::error(RETRIEVAL_ERROR_MESSAGE)
            }
        }
    }

    /// Get all products. An empty table is a successful empty list.
    pub async fn get_all(&self) -> Response<ProductsListResponseModel> {
        tracing::info!("Fetching all products from database");

        match self.repository.get_all().await {
            Ok(products) => Response::ok(products.as_slice().into()),
            Err(e) => {
                tracing::error!(error = ?e, "Failed to retrieve products");
                Response::error(RETRIEVAL_ERROR_MESSAGE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::models::{Product, ResponseStatus};
    use crate::repository::MockProductsRepository;
    use mockall::predicate::eq;
    use rust_decimal::dec;
    use sea_orm::DbErr;

    fn tea() -> Product {
        Product {
            id: 1,
            name: "Tea".to_string(),
            is_available: true,
            price: dec!(19.99),
            category_id: 1,
            category_name: "Food".to_string(),
        }
    }

    fn db_fault() -> CatalogError {
        CatalogError::Database(DbErr::Custom("connection reset".to_string()))
    }

    #[tokio::test]
    async fn test_get_existing_product_returns_ok_with_mapped_fields() {
        let mut mock_repo = MockProductsRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(1))
            .returning(|_| Ok(Some(tea())));

        let service = ProductsService::new(mock_repo);
        let response = service.get(1).await;

        assert_eq!(response.status, ResponseStatus::Ok);
        assert!(response.error_message.is_none());

        let dto = response.data.unwrap();
        assert_eq!(dto.id, 1);
        assert_eq!(dto.name, "Tea");
        assert!(dto.is_available);
        assert_eq!(dto.price, dec!(19.99));
        assert_eq!(dto.category_name, "Food");
    }

    #[tokio::test]
    async fn test_get_missing_product_returns_not_found_with_fixed_message() {
        let mut mock_repo = MockProductsRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));

        let service = ProductsService::new(mock_repo);
        let response = service.get(42).await;

        assert_eq!(response.status, ResponseStatus::NotFound);
        assert_eq!(response.error_message.as_deref(), Some(NOT_FOUND_MESSAGE));
        assert!(response.data.is_none());
    }

    #[tokio::test]
    async fn test_get_on_repository_fault_returns_error_with_fixed_message() {
        let mut mock_repo = MockProductsRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Err(db_fault()));

        let service = ProductsService::new(mock_repo);
        let response = service.get(1).await;

        assert_eq!(response.status, ResponseStatus::Error);
        assert_eq!(
            response.error_message.as_deref(),
            Some(RETRIEVAL_ERROR_MESSAGE)
        );
        // The fault detail stays server-side.
        assert!(response.data.is_none());
    }

    #[tokio::test]
    async fn test_get_all_returns_ok_with_all_products() {
        let mut mock_repo = MockProductsRepository::new();
        mock_repo.expect_get_all().returning(|| {
            Ok(vec![
                tea(),
                Product {
                    id: 2,
                    name: "Milk".to_string(),
                    is_available: true,
                    price: dec!(30.00),
                    category_id: 1,
                    category_name: "Food".to_string(),
                },
            ])
        });

        let service = ProductsService::new(mock_repo);
        let response = service.get_all().await;

        assert_eq!(response.status, ResponseStatus::Ok);
        let list = response.data.unwrap();
        assert_eq!(list.products.len(), 2);
        assert_eq!(list.products[1].name, "Milk");
    }

    #[tokio::test]
    async fn test_get_all_on_empty_table_returns_ok_with_empty_list() {
        let mut mock_repo = MockProductsRepository::new();
        mock_repo.expect_get_all().returning(|| Ok(vec![]));

        let service = ProductsService::new(mock_repo);
        let response = service.get_all().await;

        assert_eq!(response.status, ResponseStatus::Ok);
        assert!(response.error_message.is_none());
        assert_eq!(response.data.unwrap().products.len(), 0);
    }

    #[tokio::test]
    async fn test_get_all_on_repository_fault_returns_error() {
        let mut mock_repo = MockProductsRepository::new();
        mock_repo.expect_get_all().returning(|| Err(db_fault()));

        let service = ProductsService::new(mock_repo);
        let response = service.get_all().await;

        assert_eq!(response.status, ResponseStatus::Error);
        assert_eq!(
            response.error_message.as_deref(),
            Some(RETRIEVAL_ERROR_MESSAGE)
        );
        assert!(response.data.is_none());
    }
}
