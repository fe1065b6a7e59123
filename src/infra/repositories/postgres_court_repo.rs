use crate::domain::{models::court::Court, ports::CourtRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresCourtRepo {
    pool: PgPool,
}

impl PostgresCourtRepo {
    pub fn new(pool: PgPool) -> Self { Self { pool } }
}

#[async_trait]
impl CourtRepository for PostgresCourtRepo {
    async fn create(&self, court: &Court) -> Result<Court, AppError> {
        sqlx::query_as::<_, Court>(
            r#"INSERT INTO courts (id, complex_id, name, sport_type, is_active, created_at)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING *"#
        )
            .bind(&court.id)
            .bind(&court.complex_id)
            .bind(&court.name)
            .bind(&court.sport_type)
            .bind(court.is_active)
            .bind(court.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, complex_id: &str, id: &str) -> Result<Option<Court>, AppError> {
        sqlx::query_as::<_, Court>("SELECT * FROM courts WHERE complex_id = $1 AND id = $2")
            .bind(complex_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_complex(&self, complex_id: &str) -> Result<Vec<Court>, AppError> {
        sqlx::query_as::<_, Court>("SELECT * FROM courts WHERE complex_id = $1 ORDER BY created_at")
            .bind(complex_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, court: &Court) -> Result<Court, AppError> {
        sqlx::query_as::<_, Court>(
            r#"UPDATE courts SET name=$1, sport_type=$2, is_active=$3
               WHERE id=$4 AND complex_id=$5 RETURNING *"#
        )
            .bind(&court.name)
            .bind(&court.sport_type)
            .bind(court.is_active)
            .bind(&court.id)
            .bind(&court.complex_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, complex_id: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM courts WHERE id = $1 AND complex_id = $2")
            .bind(id)
            .bind(complex_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Court not found".into()));
        }
        Ok(())
    }
}
