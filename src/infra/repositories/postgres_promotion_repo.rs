use crate::domain::{models::promotion::Promotion, ports::PromotionRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresPromotionRepo {
    pool: PgPool,
}

impl PostgresPromotionRepo {
    pub fn new(pool: PgPool) -> Self { Self { pool } }
}

#[async_trait]
impl PromotionRepository for PostgresPromotionRepo {
    async fn create(&self, promotion: &Promotion) -> Result<Promotion, AppError> {
        sqlx::query_as::<_, Promotion>(
            r#"INSERT INTO promotions (
                id, complex_id, name, promotion_type, value,
                gift_products_json, is_active, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *"#
        )
            .bind(&promotion.id)
            .bind(&promotion.complex_id)
            .bind(&promotion.name)
            .bind(&promotion.promotion_type)
            .bind(promotion.value)
            .bind(&promotion.gift_products_json)
            .bind(promotion.is_active)
            .bind(promotion.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Promotion>, AppError> {
        sqlx::query_as::<_, Promotion>("SELECT * FROM promotions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_complex(&self, complex_id: &str) -> Result<Vec<Promotion>, AppError> {
        sqlx::query_as::<_, Promotion>(
            "SELECT * FROM promotions WHERE complex_id = $1 ORDER BY created_at"
        )
            .bind(complex_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, promotion: &Promotion) -> Result<Promotion, AppError> {
        sqlx::query_as::<_, Promotion>(
            r#"UPDATE promotions SET
                name=$1, promotion_type=$2, value=$3, gift_products_json=$4, is_active=$5
               WHERE id=$6 RETURNING *"#
        )
            .bind(&promotion.name)
            .bind(&promotion.promotion_type)
            .bind(promotion.value)
            .bind(&promotion.gift_products_json)
            .bind(promotion.is_active)
            .bind(&promotion.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM promotions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Promotion not found".into()));
        }
        Ok(())
    }
}
