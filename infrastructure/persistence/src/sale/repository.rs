use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::sale::model::Sale;
use business::domain::sale::repository::SaleRepository;
use business::domain::shared::value_objects::UserId;

use super::entity::SaleEntity;
use crate::errors::map_sqlx_error;
use crate::money::price_to_decimal;

pub struct SaleRepositoryPostgres {
    pool: PgPool,
}

impl SaleRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SaleRepository for SaleRepositoryPostgres {
    async fn get_all_by_seller(&self, user_id: &UserId) -> Result<Vec<Sale>, RepositoryError> {
        let entities = sqlx::query_as::<_, SaleEntity>(
            "SELECT id, user_id, product_id, name, description, amount, price, sold_at FROM sales WHERE user_id = $1 ORDER BY sold_at DESC",
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_product(&self, product_id: Uuid) -> Result<Vec<Sale>, RepositoryError> {
        let entities = sqlx::query_as::<_, SaleEntity>(
            "SELECT id, user_id, product_id, name, description, amount, price, sold_at FROM sales WHERE product_id = $1 ORDER BY sold_at DESC",
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn record(&self, sale: &Sale) -> Result<(), RepositoryError> {
        let product_id = sale.product_id.ok_or(RepositoryError::NotFound)?;

        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        // Conditional decrement: never lets stock go below zero, even when
        // two sales of the same product race.
        let updated = sqlx::query(
            "UPDATE products SET quantity = quantity - $1, updated_at = $2 WHERE id = $3 AND quantity >= $1",
        )
        .bind(sale.amount)
        .bind(sale.sold_at)
        .bind(product_id)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        if updated.rows_affected() == 0 {
            let exists = sqlx::query_scalar::<_, Uuid>("SELECT id FROM products WHERE id = $1")
                .bind(product_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(map_sqlx_error)?
                .is_some();

            tx.rollback().await.map_err(map_sqlx_error)?;

            return Err(if exists {
                RepositoryError::Conflict
            } else {
                RepositoryError::NotFound
            });
        }

        sqlx::query(
            r#"INSERT INTO sales (id, user_id, product_id, name, description, amount, price, sold_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)"#,
        )
        .bind(sale.id)
        .bind(sale.user_id.as_uuid())
        .bind(sale.product_id)
        .bind(&sale.name)
        .bind(&sale.description)
        .bind(sale.amount)
        .bind(price_to_decimal(sale.price)?)
        .bind(sale.sold_at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;

        Ok(())
    }
}
