use crate::domain::{models::rate::Rate, ports::RateRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteRateRepo {
    pool: SqlitePool,
}

impl SqliteRateRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RateRepository for SqliteRateRepo {
    async fn create(&self, rate: &Rate) -> Result<Rate, AppError> {
        sqlx::query_as::<_, Rate>(
            r#"INSERT INTO rates (id, complex_id, name, price, reservation_amount, is_active, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?)
               RETURNING *"#
        )
            .bind(&rate.id)
            .bind(&rate.complex_id)
            .bind(&rate.name)
            .bind(rate.price)
            .bind(rate.reservation_amount)
            .bind(rate.is_active)
            .bind(rate.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Rate>, AppError> {
        sqlx::query_as::<_, Rate>("SELECT * FROM rates WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_for_complex(&self, complex_id: &str) -> Result<Vec<Rate>, AppError> {
        sqlx::query_as::<_, Rate>(
            r#"SELECT * FROM rates
               WHERE complex_id = ? OR complex_id IS NULL
               ORDER BY created_at"#
        )
            .bind(complex_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, rate: &Rate) -> Result<Rate, AppError> {
        sqlx::query_as::<_, Rate>(
            r#"UPDATE rates SET name=?, price=?, reservation_amount=?, is_active=?
               WHERE id=? RETURNING *"#
        )
            .bind(&rate.name)
            .bind(rate.price)
            .bind(rate.reservation_amount)
            .bind(rate.is_active)
            .bind(&rate.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn deactivate(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE rates SET is_active = FALSE WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Rate not found".into()));
        }
        Ok(())
    }
}
