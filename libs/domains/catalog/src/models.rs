use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Category entity - a named group of products
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

/// Product read model.
///
/// An eagerly-joined, immutable projection: `category_name` is resolved
/// from the owning category at query time, so no live entity graph is
/// carried around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub is_available: bool,
    pub price: Decimal,
    pub category_id: i32,
    pub category_name: String,
}

/// DTO for inserting a new product
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateProduct {
    pub name: String,
    pub is_available: bool,
    pub price: Decimal,
    pub category_id: i32,
}

/// Outcome of a service call, carried inside the [`Response`] envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ResponseStatus {
    Ok,
    NotFound,
    Error,
}

/// Uniform envelope returned by every service call.
///
/// Success and failure share one shape: `status` tells the caller which
/// of `error_message` and `data` is populated.
///
/// # JSON Example
///
/// ```json
/// {
///   "status": "NotFound",
///   "errorMessage": "product not found in database",
///   "data": null
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Response<T> {
    pub status: ResponseStatus,
    pub error_message: Option<String>,
    pub data: Option<T>,
}

impl<T> Response<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: ResponseStatus::Ok,
            error_message: None,
            data: Some(data),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::NotFound,
            error_message: Some(message.into()),
            data: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            error_message: Some(message.into()),
            data: None,
        }
    }
}

/// Product DTO as returned over the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponseModel {
    pub id: i32,
    pub name: String,
    pub is_available: bool,
    pub price: Decimal,
    pub category_name: String,
}

/// Wrapper DTO for the product list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductsListResponseModel {
    pub products: Vec<ProductResponseModel>,
}

/// Category DTO as returned over the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponseModel {
    pub id: i32,
    pub name: String,
}

impl From<&Product> for ProductResponseModel {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            is_available: product.is_available,
            price: product.price,
            category_name: product.category_name.clone(),
        }
    }
}

impl From<&[Product]> for ProductsListResponseModel {
    fn from(products: &[Product]) -> Self {
        Self {
            products: products.iter().map(Into::into).collect(),
        }
    }
}

impl From<&Category> for CategoryResponseModel {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn test_envelope_serializes_with_camel_case_keys() {
        let response: Response<ProductResponseModel> =
            Response::not_found("product not found in database");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "NotFound");
        assert_eq!(json["errorMessage"], "product not found in database");
        assert!(json["data"].is_null());
    }

    #[test]
    fn test_product_response_model_from_product() {
        let product = Product {
            id: 7,
            name: "Cream".to_string(),
            is_available: true,
            price: dec!(100.01),
            category_id: 3,
            category_name: "Cosmetics".to_string(),
        };

        let dto = ProductResponseModel::from(&product);
        assert_eq!(dto.id, 7);
        assert_eq!(dto.name, "Cream");
        assert_eq!(dto.price, dec!(100.01));
        assert_eq!(dto.category_name, "Cosmetics");

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["isAvailable"], true);
        assert_eq!(json["categoryName"], "Cosmetics");
    }

    #[test]
    fn test_ok_envelope_has_no_error_message() {
        let response = Response::ok(ProductsListResponseModel { products: vec![] });
        assert_eq!(response.status, ResponseStatus::Ok);
        assert!(response.error_message.is_none());
        assert!(response.data.is_some());
    }
}
