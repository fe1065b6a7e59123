use std::sync::Arc;
use crate::domain::ports::{
    ComplexRepository, CourtRepository, PromotionRepository, RateRepository,
    ReserveRepository, ScheduleRepository, UnavailableDayRepository,
};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub complex_repo: Arc<dyn ComplexRepository>,
    pub court_repo: Arc<dyn CourtRepository>,
    pub schedule_repo: Arc<dyn ScheduleRepository>,
    pub rate_repo: Arc<dyn RateRepository>,
    pub promotion_repo: Arc<dyn PromotionRepository>,
    pub unavailable_day_repo: Arc<dyn UnavailableDayRepository>,
    pub reserve_repo: Arc<dyn ReserveRepository>,
}
