use crate::domain::{models::unavailable_day::UnavailableDay, ports::UnavailableDayRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteUnavailableDayRepo {
    pool: SqlitePool,
}

impl SqliteUnavailableDayRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UnavailableDayRepository for SqliteUnavailableDayRepo {
    async fn create(&self, day: &UnavailableDay) -> Result<UnavailableDay, AppError> {
        sqlx::query_as::<_, UnavailableDay>(
            r#"INSERT INTO unavailable_days (id, complex_id, date, reason, created_at)
               VALUES (?, ?, ?, ?, ?)
               RETURNING *"#
        )
            .bind(&day.id)
            .bind(&day.complex_id)
            .bind(day.date)
            .bind(&day.reason)
            .bind(day.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_for_complex(&self, complex_id: &str) -> Result<Vec<UnavailableDay>, AppError> {
        sqlx::query_as::<_, UnavailableDay>(
            r#"SELECT * FROM unavailable_days
               WHERE complex_id = ? OR complex_id IS NULL
               ORDER BY date"#
        )
            .bind(complex_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM unavailable_days WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Unavailable day not found".into()));
        }
        Ok(())
    }
}
