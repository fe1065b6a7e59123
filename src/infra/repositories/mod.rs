pub mod postgres_complex_repo;
pub mod postgres_court_repo;
pub mod postgres_promotion_repo;
pub mod postgres_rate_repo;
pub mod postgres_reserve_repo;
pub mod postgres_schedule_repo;
pub mod postgres_unavailable_day_repo;
pub mod sqlite_complex_repo;
pub mod sqlite_court_repo;
pub mod sqlite_promotion_repo;
pub mod sqlite_rate_repo;
pub mod sqlite_reserve_repo;
pub mod sqlite_schedule_repo;
pub mod sqlite_unavailable_day_repo;
