use async_trait::async_trait;
use sea_orm::sea_query::{Alias, Expr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, Order, QueryOrder,
    QuerySelect, RelationTrait,
};

use crate::{
    entity,
    error::{CatalogError, CatalogResult},
    models::{Category, CreateProduct, Product},
    repository::{CategoriesRepository, ProductsRepository},
};

/// PostgreSQL products repository backed by SeaORM.
///
/// Category names are resolved through an eager inner join; no lazy
/// navigation, no transactions, no caching.
#[derive(Clone)]
pub struct PgProductsRepository {
    db: DatabaseConnection,
}

impl PgProductsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn join_product(
    (product, category): (entity::product::Model, Option<entity::category::Model>),
) -> CatalogResult<Product> {
    // The FK is non-nullable, so a missing category means the row was
    // removed between the two reads.
    let category = category.ok_or(CatalogError::MissingCategory(product.category_id))?;
    Ok((product, category).into())
}

#[async_trait]
impl ProductsRepository for PgProductsRepository {
    async fn get_by_id(&self, id: i32) -> CatalogResult<Option<Product>> {
        let row = entity::product::Entity::find_by_id(id)
            .find_also_related(entity::category::Entity)
            .one(&self.db)
            .await?;

        row.map(join_product).transpose()
    }

    async fn get_all(&self) -> CatalogResult<Vec<Product>> {
        let rows = entity::product::Entity::find()
            .find_also_related(entity::category::Entity)
            .all(&self.db)
            .await?;

        rows.into_iter().map(join_product).collect()
    }

    async fn insert(&self, input: CreateProduct) -> CatalogResult<Product> {
        let category = entity::category::Entity::find_by_id(input.category_id)
            .one(&self.db)
            .await?
            .ok_or(CatalogError::MissingCategory(input.category_id))?;

        let active_model: entity::product::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok((model, category).into())
    }

    async fn most_frequent_category_name(&self) -> CatalogResult<Option<String>> {
        let row: Option<(String, i64)> = entity::product::Entity::find()
            .select_only()
            .column(entity::category::Column::Name)
            .column_as(entity::product::Column::Id.count(), "product_count")
            .join(
                JoinType::InnerJoin,
                entity::product::Relation::Category.def(),
            )
            .group_by(entity::category::Column::Name)
            .order_by(Expr::col(Alias::new("product_count")), Order::Desc)
            .order_by(entity::category::Column::Name, Order::Asc)
            .into_tuple()
            .one(&self.db)
            .await?;

        Ok(row.map(|(name, _)| name))
    }
}

/// PostgreSQL categories repository backed by SeaORM.
#[derive(Clone)]
pub struct PgCategoriesRepository {
    db: DatabaseConnection,
}

impl PgCategoriesRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoriesRepository for PgCategoriesRepository {
    async fn get_by_id(&self, id: i32) -> CatalogResult<Option<Category>> {
        let model = entity::category::Entity::find_by_id(id)
            .one(&self.db)
            .await?;

        Ok(model.map(Into::into))
    }

    async fn get_all(&self) -> CatalogResult<Vec<Category>> {
        let models = entity::category::Entity::find()
            .order_by(entity::category::Column::Id, Order::Asc)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
