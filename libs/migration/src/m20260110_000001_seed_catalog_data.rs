use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
            INSERT INTO categories (id, name)
            VALUES
                (1, 'Food'),
                (2, 'Electronics'),
                (3, 'Cosmetics')
            ON CONFLICT (id) DO NOTHING
            "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
            INSERT INTO products (id, name, is_available, price, category_id)
            VALUES
                (1, 'Tea', true, 19.99, 1),
                (2, 'Milk', true, 30.00, 1),
                (3, 'Bread', false, 18.20, 1),
                (4, 'Sony Xperia 1', false, 16420.75, 2),
                (5, 'Xiaomi Redmi 9', true, 6969.42, 2),
                (6, 'Meizu m8 Note', false, 5999.99, 2),
                (7, 'Cream', true, 100.01, 3),
                (8, 'Shampoo', true, 59.80, 3),
                (9, 'Tonic', false, 80.14, 3),
                (10, 'Eyeshadow', true, 401.25, 3)
            ON CONFLICT (id) DO NOTHING
            "#,
            )
            .await?;

        // Seed rows carry explicit ids; move the identity sequences past them.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
            SELECT setval(pg_get_serial_sequence('categories', 'id'), (SELECT MAX(id) FROM categories));
            SELECT setval(pg_get_serial_sequence('products', 'id'), (SELECT MAX(id) FROM products));
            "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DELETE FROM products WHERE id BETWEEN 1 AND 10")
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DELETE FROM categories WHERE id BETWEEN 1 AND 3")
            .await?;

        Ok(())
    }
}
