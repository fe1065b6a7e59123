use crate::domain::{models::complex::Complex, ports::ComplexRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresComplexRepo {
    pool: PgPool,
}

impl PostgresComplexRepo {
    pub fn new(pool: PgPool) -> Self { Self { pool } }
}

#[async_trait]
impl ComplexRepository for PostgresComplexRepo {
    async fn create(&self, complex: &Complex) -> Result<Complex, AppError> {
        sqlx::query_as::<_, Complex>(
            r#"INSERT INTO complexes (id, name, address, phone, is_active, created_at)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING *"#
        )
            .bind(&complex.id)
            .bind(&complex.name)
            .bind(&complex.address)
            .bind(&complex.phone)
            .bind(complex.is_active)
            .bind(complex.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Complex>, AppError> {
        sqlx::query_as::<_, Complex>("SELECT * FROM complexes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Complex>, AppError> {
        sqlx::query_as::<_, Complex>("SELECT * FROM complexes ORDER BY created_at")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, complex: &Complex) -> Result<Complex, AppError> {
        sqlx::query_as::<_, Complex>(
            r#"UPDATE complexes SET name=$1, address=$2, phone=$3, is_active=$4
               WHERE id=$5 RETURNING *"#
        )
            .bind(&complex.name)
            .bind(&complex.address)
            .bind(&complex.phone)
            .bind(complex.is_active)
            .bind(&complex.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM complexes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Complex not found".into()));
        }
        Ok(())
    }
}
