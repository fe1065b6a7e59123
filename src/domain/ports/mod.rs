use crate::domain::models::{
    complex::Complex, court::Court, promotion::Promotion, rate::Rate, reserve::Reserve,
    schedule::{Schedule, ScheduleDay}, unavailable_day::UnavailableDay,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait ComplexRepository: Send + Sync {
    async fn create(&self, complex: &Complex) -> Result<Complex, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Complex>, AppError>;
    async fn list(&self) -> Result<Vec<Complex>, AppError>;
    async fn update(&self, complex: &Complex) -> Result<Complex, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait CourtRepository: Send + Sync {
    async fn create(&self, court: &Court) -> Result<Court, AppError>;
    async fn find_by_id(&self, complex_id: &str, id: &str) -> Result<Option<Court>, AppError>;
    async fn list_by_complex(&self, complex_id: &str) -> Result<Vec<Court>, AppError>;
    async fn update(&self, court: &Court) -> Result<Court, AppError>;
    async fn delete(&self, complex_id: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    // Weekday activation rows (one per complex and day-of-week).
    async fn create_day(&self, day: &ScheduleDay) -> Result<ScheduleDay, AppError>;
    async fn list_days(&self, complex_id: &str) -> Result<Vec<ScheduleDay>, AppError>;
    async fn find_day(&self, complex_id: &str, day_of_week: i32) -> Result<Option<ScheduleDay>, AppError>;
    async fn set_day_active(&self, complex_id: &str, day_of_week: i32, is_active: bool) -> Result<ScheduleDay, AppError>;

    // Time windows.
    async fn create(&self, schedule: &Schedule) -> Result<Schedule, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Schedule>, AppError>;
    async fn list_by_complex(&self, complex_id: &str) -> Result<Vec<Schedule>, AppError>;
    async fn list_by_day(&self, complex_id: &str, day_of_week: i32) -> Result<Vec<Schedule>, AppError>;
    async fn update(&self, schedule: &Schedule) -> Result<Schedule, AppError>;
    async fn delete(&self, complex_id: &str, id: &str) -> Result<(), AppError>;

    // Ordered rate attachment; position decides which rate prices the window.
    async fn set_rates(&self, schedule_id: &str, rate_ids: &[String]) -> Result<(), AppError>;
    async fn list_rates(&self, schedule_id: &str) -> Result<Vec<Rate>, AppError>;
}

#[async_trait]
pub trait RateRepository: Send + Sync {
    async fn create(&self, rate: &Rate) -> Result<Rate, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Rate>, AppError>;
    /// Complex-scoped rates plus global ones (`complex_id` null).
    async fn list_for_complex(&self, complex_id: &str) -> Result<Vec<Rate>, AppError>;
    async fn update(&self, rate: &Rate) -> Result<Rate, AppError>;
    async fn deactivate(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait PromotionRepository: Send + Sync {
    async fn create(&self, promotion: &Promotion) -> Result<Promotion, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Promotion>, AppError>;
    async fn list_by_complex(&self, complex_id: &str) -> Result<Vec<Promotion>, AppError>;
    async fn update(&self, promotion: &Promotion) -> Result<Promotion, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait UnavailableDayRepository: Send + Sync {
    async fn create(&self, day: &UnavailableDay) -> Result<UnavailableDay, AppError>;
    /// Complex-scoped blocks plus global ones (`complex_id` null).
    async fn list_for_complex(&self, complex_id: &str) -> Result<Vec<UnavailableDay>, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ReserveRepository: Send + Sync {
    async fn create(&self, reserve: &Reserve) -> Result<Reserve, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Reserve>, AppError>;
    async fn list_by_complex(&self, complex_id: &str) -> Result<Vec<Reserve>, AppError>;
    async fn list_by_date(&self, complex_id: &str, date: NaiveDate) -> Result<Vec<Reserve>, AppError>;
    async fn update_status(&self, id: &str, status: &str) -> Result<Reserve, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
