use crate::domain::{
    models::rate::Rate,
    models::schedule::{Schedule, ScheduleDay},
    ports::ScheduleRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteScheduleRepo {
    pool: SqlitePool,
}

impl SqliteScheduleRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScheduleRepository for SqliteScheduleRepo {
    async fn create_day(&self, day: &ScheduleDay) -> Result<ScheduleDay, AppError> {
        sqlx::query_as::<_, ScheduleDay>(
            r#"INSERT INTO schedule_days (id, complex_id, day_of_week, is_active, created_at)
               VALUES (?, ?, ?, ?, ?)
               RETURNING *"#
        )
            .bind(&day.id)
            .bind(&day.complex_id)
            .bind(day.day_of_week)
            .bind(day.is_active)
            .bind(day.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_days(&self, complex_id: &str) -> Result<Vec<ScheduleDay>, AppError> {
        sqlx::query_as::<_, ScheduleDay>(
            "SELECT * FROM schedule_days WHERE complex_id = ? ORDER BY day_of_week"
        )
            .bind(complex_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_day(&self, complex_id: &str, day_of_week: i32) -> Result<Option<ScheduleDay>, AppError> {
        sqlx::query_as::<_, ScheduleDay>(
            "SELECT * FROM schedule_days WHERE complex_id = ? AND day_of_week = ?"
        )
            .bind(complex_id)
            .bind(day_of_week)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn set_day_active(&self, complex_id: &str, day_of_week: i32, is_active: bool) -> Result<ScheduleDay, AppError> {
        sqlx::query_as::<_, ScheduleDay>(
            r#"UPDATE schedule_days SET is_active=?
               WHERE complex_id=? AND day_of_week=? RETURNING *"#
        )
            .bind(is_active)
            .bind(complex_id)
            .bind(day_of_week)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Schedule day not found".into()))
    }

    async fn create(&self, schedule: &Schedule) -> Result<Schedule, AppError> {
        sqlx::query_as::<_, Schedule>(
            r#"INSERT INTO schedules (
                id, complex_id, schedule_day_id, start_time, end_time,
                sport_type, court_ids_json, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *"#
        )
            .bind(&schedule.id)
            .bind(&schedule.complex_id)
            .bind(&schedule.schedule_day_id)
            .bind(&schedule.start_time)
            .bind(&schedule.end_time)
            .bind(&schedule.sport_type)
            .bind(&schedule.court_ids_json)
            .bind(schedule.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Schedule>, AppError> {
        sqlx::query_as::<_, Schedule>("SELECT * FROM schedules WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_complex(&self, complex_id: &str) -> Result<Vec<Schedule>, AppError> {
        sqlx::query_as::<_, Schedule>(
            "SELECT * FROM schedules WHERE complex_id = ? ORDER BY created_at, id"
        )
            .bind(complex_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_day(&self, complex_id: &str, day_of_week: i32) -> Result<Vec<Schedule>, AppError> {
        sqlx::query_as::<_, Schedule>(
            r#"SELECT s.* FROM schedules s
               JOIN schedule_days d ON d.id = s.schedule_day_id
               WHERE s.complex_id = ? AND d.day_of_week = ?
               ORDER BY s.created_at, s.id"#
        )
            .bind(complex_id)
            .bind(day_of_week)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, schedule: &Schedule) -> Result<Schedule, AppError> {
        sqlx::query_as::<_, Schedule>(
            r#"UPDATE schedules SET
                schedule_day_id=?, start_time=?, end_time=?, sport_type=?, court_ids_json=?
               WHERE id=? AND complex_id=? RETURNING *"#
        )
            .bind(&schedule.schedule_day_id)
            .bind(&schedule.start_time)
            .bind(&schedule.end_time)
            .bind(&schedule.sport_type)
            .bind(&schedule.court_ids_json)
            .bind(&schedule.id)
            .bind(&schedule.complex_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, complex_id: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM schedules WHERE id = ? AND complex_id = ?")
            .bind(id)
            .bind(complex_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Schedule not found".into()));
        }
        Ok(())
    }

    async fn set_rates(&self, schedule_id: &str, rate_ids: &[String]) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        sqlx::query("DELETE FROM schedule_rates WHERE schedule_id = ?")
            .bind(schedule_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        for (position, rate_id) in rate_ids.iter().enumerate() {
            sqlx::query(
                "INSERT INTO schedule_rates (schedule_id, rate_id, position) VALUES (?, ?, ?)"
            )
                .bind(schedule_id)
                .bind(rate_id)
                .bind(position as i32)
                .execute(&mut *tx)
                .await
                .map_err(AppError::Database)?;
        }

        tx.commit().await.map_err(AppError::Database)
    }

    async fn list_rates(&self, schedule_id: &str) -> Result<Vec<Rate>, AppError> {
        sqlx::query_as::<_, Rate>(
            r#"SELECT r.* FROM rates r
               JOIN schedule_rates sr ON sr.rate_id = r.id
               WHERE sr.schedule_id = ?
               ORDER BY sr.position"#
        )
            .bind(schedule_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
