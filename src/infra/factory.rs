use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::infra::repositories::{
    postgres_complex_repo::PostgresComplexRepo, postgres_court_repo::PostgresCourtRepo,
    postgres_promotion_repo::PostgresPromotionRepo, postgres_rate_repo::PostgresRateRepo,
    postgres_reserve_repo::PostgresReserveRepo, postgres_schedule_repo::PostgresScheduleRepo,
    postgres_unavailable_day_repo::PostgresUnavailableDayRepo,
    sqlite_complex_repo::SqliteComplexRepo, sqlite_court_repo::SqliteCourtRepo,
    sqlite_promotion_repo::SqlitePromotionRepo, sqlite_rate_repo::SqliteRateRepo,
    sqlite_reserve_repo::SqliteReserveRepo, sqlite_schedule_repo::SqliteScheduleRepo,
    sqlite_unavailable_day_repo::SqliteUnavailableDayRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        AppState {
            config: config.clone(),
            complex_repo: Arc::new(PostgresComplexRepo::new(pool.clone())),
            court_repo: Arc::new(PostgresCourtRepo::new(pool.clone())),
            schedule_repo: Arc::new(PostgresScheduleRepo::new(pool.clone())),
            rate_repo: Arc::new(PostgresRateRepo::new(pool.clone())),
            promotion_repo: Arc::new(PostgresPromotionRepo::new(pool.clone())),
            unavailable_day_repo: Arc::new(PostgresUnavailableDayRepo::new(pool.clone())),
            reserve_repo: Arc::new(PostgresReserveRepo::new(pool.clone())),
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        AppState {
            config: config.clone(),
            complex_repo: Arc::new(SqliteComplexRepo::new(pool.clone())),
            court_repo: Arc::new(SqliteCourtRepo::new(pool.clone())),
            schedule_repo: Arc::new(SqliteScheduleRepo::new(pool.clone())),
            rate_repo: Arc::new(SqliteRateRepo::new(pool.clone())),
            promotion_repo: Arc::new(SqlitePromotionRepo::new(pool.clone())),
            unavailable_day_repo: Arc::new(SqliteUnavailableDayRepo::new(pool.clone())),
            reserve_repo: Arc::new(SqliteReserveRepo::new(pool.clone())),
        }
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
