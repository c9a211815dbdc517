//! SeaORM entities for the `categories` and `products` tables.

pub mod category {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "categories")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::product::Entity")]
        Product,
    }

    impl Related<super::product::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Product.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod product {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "products")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub name: String,
        pub is_available: bool,
        #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
        pub price: Decimal,
        pub category_id: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::category::Entity",
            from = "Column::CategoryId",
            to = "super::category::Column::Id",
            on_delete = "Cascade"
        )]
        Category,
    }

    impl Related<super::category::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Category.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

impl From<category::Model> for crate::models::Category {
    fn from(model: category::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

// The joined (product, category) pair becomes the flat read model.
impl From<(product::Model, category::Model)> for crate::models::Product {
    fn from((product, category): (product::Model, category::Model)) -> Self {
        Self {
            id: product.id,
            name: product.name,
            is_available: product.is_available,
            price: product.price,
            category_id: product.category_id,
            category_name: category.name,
        }
    }
}

impl From<crate::models::CreateProduct> for product::ActiveModel {
    fn from(input: crate::models::CreateProduct) -> Self {
        use sea_orm::ActiveValue::Set;

        Self {
            name: Set(input.name),
            is_available: Set(input.is_available),
            price: Set(input.price),
            category_id: Set(input.category_id),
            ..Default::default()
        }
    }
}
