use crate::domain::{models::reserve::Reserve, ports::ReserveRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;

pub struct SqliteReserveRepo {
    pool: SqlitePool,
}

impl SqliteReserveRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReserveRepository for SqliteReserveRepo {
    async fn create(&self, reserve: &Reserve) -> Result<Reserve, AppError> {
        sqlx::query_as::<_, Reserve>(
            r#"INSERT INTO reserves (
                id, complex_id, court_id, promotion_id, date, schedule,
                price, deposit, discount, final_price, gift_products_json,
                status, customer_name, customer_email, customer_phone, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *"#
        )
            .bind(&reserve.id)
            .bind(&reserve.complex_id)
            .bind(&reserve.court_id)
            .bind(&reserve.promotion_id)
            .bind(reserve.date)
            .bind(&reserve.schedule)
            .bind(reserve.price)
            .bind(reserve.deposit)
            .bind(reserve.discount)
            .bind(reserve.final_price)
            .bind(&reserve.gift_products_json)
            .bind(&reserve.status)
            .bind(&reserve.customer_name)
            .bind(&reserve.customer_email)
            .bind(&reserve.customer_phone)
            .bind(reserve.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Reserve>, AppError> {
        sqlx::query_as::<_, Reserve>("SELECT * FROM reserves WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_complex(&self, complex_id: &str) -> Result<Vec<Reserve>, AppError> {
        sqlx::query_as::<_, Reserve>(
            "SELECT * FROM reserves WHERE complex_id = ? ORDER BY date, schedule"
        )
            .bind(complex_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_date(&self, complex_id: &str, date: NaiveDate) -> Result<Vec<Reserve>, AppError> {
        sqlx::query_as::<_, Reserve>(
            "SELECT * FROM reserves WHERE complex_id = ? AND date = ? ORDER BY schedule"
        )
            .bind(complex_id)
            .bind(date)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update_status(&self, id: &str, status: &str) -> Result<Reserve, AppError> {
        sqlx::query_as::<_, Reserve>(
            "UPDATE reserves SET status=? WHERE id=? RETURNING *"
        )
            .bind(status)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Reserve not found".into()))
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM reserves WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Reserve not found".into()));
        }
        Ok(())
    }
}
