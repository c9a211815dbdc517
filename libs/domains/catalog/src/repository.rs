use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{Category, CreateProduct, Product};

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    /// Get a product by id, with its category name resolved.
    ///
    /// A missing row is a soft miss (`Ok(None)`); storage faults propagate.
    async fn get_by_id(&self, id: i32) -> CatalogResult<Option<Product>>;

    /// Get all products, no pagination or filtering.
    async fn get_all(&self) -> CatalogResult<Vec<Product>>;

    /// Insert a new product. Fails when the referenced category is absent.
    async fn insert(&self, input: CreateProduct) -> CatalogResult<Product>;

    /// Name of the category owning the most products.
    ///
    /// `None` when the product table is empty; ties break by ascending
    /// category name.
    async fn most_frequent_category_name(&self) -> CatalogResult<Option<String>>;
}

/// Repository trait for Category persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoriesRepository: Send + Sync {
    async fn get_by_id(&self, id: i32) -> CatalogResult<Option<Category>>;

    async fn get_all(&self) -> CatalogResult<Vec<Category>>;
}

/// In-memory implementation of both repositories (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalogRepository {
    categories: Arc<RwLock<BTreeMap<i32, Category>>>,
    products: Arc<RwLock<BTreeMap<i32, Product>>>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a category, assigning the next free id.
    pub async fn add_category(&self, name: impl Into<String>) -> Category {
        let mut categories = self.categories.write().await;
        let id = categories.keys().last().copied().unwrap_or(0) + 1;
        let category = Category {
            id,
            name: name.into(),
        };
        categories.insert(id, category.clone());
        category
    }
}

#[async_trait]
impl ProductsRepository for InMemoryCatalogRepository {
    async fn get_by_id(&self, id: i32) -> CatalogResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn get_all(&self) -> CatalogResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }

    async fn insert(&self, input: CreateProduct) -> CatalogResult<Product> {
        let categories = self.categories.read().await;
        let category = categories
            .get(&input.category_id)
            .ok_or(CatalogError::MissingCategory(input.category_id))?;

        let mut products = self.products.write().await;
        let id = products.keys().last().copied().unwrap_or(0) + 1;
        let product = Product {
            id,
            name: input.name,
            is_available: input.is_available,
            price: input.price,
            category_id: category.id,
            category_name: category.name.clone(),
        };
        products.insert(id, product.clone());

        tracing::info!(product_id = id, "Created product");
        Ok(product)
    }

    async fn most_frequent_category_name(&self) -> CatalogResult<Option<String>> {
        let products = self.products.read().await;

        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for product in products.values() {
            *counts.entry(product.category_name.as_str()).or_default() += 1;
        }

        // max_by_key keeps the last of equal maxima; iterating names in
        // descending order makes that the lowest name among ties.
        let winner = counts
            .iter()
            .rev()
            .max_by_key(|(_, count)| **count)
            .map(|(name, _)| name.to_string());

        Ok(winner)
    }
}

#[async_trait]
impl CategoriesRepository for InMemoryCatalogRepository {
    async fn get_by_id(&self, id: i32) -> CatalogResult<Option<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.get(&id).cloned())
    }

    async fn get_all(&self) -> CatalogResult<Vec<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    async fn seeded_repo() -> InMemoryCatalogRepository {
        let repo = InMemoryCatalogRepository::new();
        repo.add_category("Food").await;
        repo.add_category("Electronics").await;
        repo.add_category("Cosmetics").await;
        repo
    }

    fn product(name: &str, price: rust_decimal::Decimal, category_id: i32) -> CreateProduct {
        CreateProduct {
            name: name.to_string(),
            is_available: true,
            price,
            category_id,
        }
    }

    #[tokio::test]
    async fn test_insert_and_get_resolves_category_name() {
        let repo = seeded_repo().await;

        let created = repo.insert(product("Tea", dec!(19.99), 1)).await.unwrap();
        assert_eq!(created.category_name, "Food");

        let fetched = ProductsRepository::get_by_id(&repo, created.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.name, "Tea");
        assert_eq!(fetched.price, dec!(19.99));
        assert_eq!(fetched.category_name, "Food");
    }

    #[tokio::test]
    async fn test_get_by_id_misses_softly() {
        let repo = seeded_repo().await;
        let fetched = ProductsRepository::get_by_id(&repo, 42).await.unwrap();
        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn test_insert_with_missing_category_fails() {
        let repo = InMemoryCatalogRepository::new();
        let result = repo.insert(product("Tea", dec!(19.99), 1)).await;
        assert!(matches!(result, Err(CatalogError::MissingCategory(1))));
    }

    #[tokio::test]
    async fn test_get_all_on_empty_table_returns_empty_vec() {
        let repo = seeded_repo().await;
        let products = ProductsRepository::get_all(&repo).await.unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_most_frequent_category_name_with_seed_distribution() {
        let repo = seeded_repo().await;

        for name in ["Tea", "Milk", "Bread"] {
            repo.insert(product(name, dec!(10.00), 1)).await.unwrap();
        }
        for name in ["Sony Xperia 1", "Xiaomi Redmi 9", "Meizu m8 Note"] {
            repo.insert(product(name, dec!(5000.00), 2)).await.unwrap();
        }
        for name in ["Cream", "Shampoo", "Tonic", "Eyeshadow"] {
            repo.insert(product(name, dec!(80.00), 3)).await.unwrap();
        }

        let winner = repo.most_frequent_category_name().await.unwrap();
        assert_eq!(winner.as_deref(), Some("Cosmetics"));
    }

    #[tokio::test]
    async fn test_most_frequent_category_name_on_empty_table() {
        let repo = seeded_repo().await;
        let winner = repo.most_frequent_category_name().await.unwrap();
        assert!(winner.is_none());
    }

    #[tokio::test]
    async fn test_most_frequent_category_name_tie_breaks_ascending() {
        let repo = seeded_repo().await;
        repo.insert(product("Tea", dec!(1.00), 1)).await.unwrap();
        repo.insert(product("Cream", dec!(1.00), 3)).await.unwrap();

        let winner = repo.most_frequent_category_name().await.unwrap();
        assert_eq!(winner.as_deref(), Some("Cosmetics"));
    }

    #[tokio::test]
    async fn test_categories_get_all() {
        let repo = seeded_repo().await;
        let categories = CategoriesRepository::get_all(&repo).await.unwrap();
        assert_eq!(categories.len(), 3);
        assert_eq!(categories[0].name, "Food");
    }
}
