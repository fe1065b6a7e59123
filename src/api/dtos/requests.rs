use crate::domain::models::promotion::GiftProduct;
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateComplexRequest {
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateComplexRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct SetScheduleDayRequest {
    pub is_active: bool,
}

#[derive(Deserialize)]
pub struct CreateCourtRequest {
    pub name: String,
    pub sport_type: String,
}

#[derive(Deserialize)]
pub struct UpdateCourtRequest {
    pub name: Option<String>,
    pub sport_type: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct CreateScheduleRequest {
    pub day_of_week: i32,
    pub start_time: String,
    pub end_time: String,
    pub sport_type: String,
    pub court_ids: Option<Vec<String>>,
    pub rate_ids: Vec<String>,
}

#[derive(Deserialize)]
pub struct UpdateScheduleRequest {
    pub day_of_week: Option<i32>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub sport_type: Option<String>,
    pub court_ids: Option<Vec<String>>,
    pub rate_ids: Option<Vec<String>>,
}

#[derive(Deserialize)]
pub struct CreateRateRequest {
    pub name: String,
    pub price: f64,
    pub reservation_amount: f64,
}

#[derive(Deserialize)]
pub struct UpdateRateRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub reservation_amount: Option<f64>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct CreatePromotionRequest {
    pub name: String,
    pub promotion_type: String,
    pub value: f64,
    pub gift_products: Option<Vec<GiftProduct>>,
}

#[derive(Deserialize)]
pub struct UpdatePromotionRequest {
    pub name: Option<String>,
    pub promotion_type: Option<String>,
    pub value: Option<f64>,
    pub gift_products: Option<Vec<GiftProduct>>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct CreateUnavailableDayRequest {
    pub date: NaiveDate,
    pub reason: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateReserveRequest {
    pub date: String,
    pub schedule: String,
    pub court_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub promotion_id: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateReserveRequest {
    pub status: String,
}
