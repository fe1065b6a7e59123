use canchas_backend::{
    api::router::create_router,
    state::AppState,
    config::Config,
    infra::repositories::{
        sqlite_complex_repo::SqliteComplexRepo,
        sqlite_court_repo::SqliteCourtRepo,
        sqlite_promotion_repo::SqlitePromotionRepo,
        sqlite_rate_repo::SqliteRateRepo,
        sqlite_reserve_repo::SqliteReserveRepo,
        sqlite_schedule_repo::SqliteScheduleRepo,
        sqlite_unavailable_day_repo::SqliteUnavailableDayRepo,
    },
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;
use axum::Router;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
        };

        let state = Arc::new(AppState {
            config: config.clone(),
            complex_repo: Arc::new(SqliteComplexRepo::new(pool.clone())),
            court_repo: Arc::new(SqliteCourtRepo::new(pool.clone())),
            schedule_repo: Arc::new(SqliteScheduleRepo::new(pool.clone())),
            rate_repo: Arc::new(SqliteRateRepo::new(pool.clone())),
            promotion_repo: Arc::new(SqlitePromotionRepo::new(pool.clone())),
            unavailable_day_repo: Arc::new(SqliteUnavailableDayRepo::new(pool.clone())),
            reserve_repo: Arc::new(SqliteReserveRepo::new(pool.clone())),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
