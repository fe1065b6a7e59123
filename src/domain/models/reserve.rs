use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Reserve {
    pub id: String,
    pub complex_id: String,
    pub court_id: String,
    pub promotion_id: Option<String>,
    pub date: NaiveDate,
    pub schedule: String,
    pub price: f64,
    pub deposit: f64,
    pub discount: f64,
    pub final_price: f64,
    pub gift_products_json: Option<String>,
    pub status: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub struct NewReserveParams {
    pub complex_id: String,
    pub court_id: String,
    pub promotion_id: Option<String>,
    pub date: NaiveDate,
    pub schedule: String,
    pub price: f64,
    pub deposit: f64,
    pub discount: f64,
    pub final_price: f64,
    pub gift_products_json: Option<String>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
}

impl Reserve {
    pub fn new(params: NewReserveParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            complex_id: params.complex_id,
            court_id: params.court_id,
            promotion_id: params.promotion_id,
            date: params.date,
            schedule: params.schedule,
            price: params.price,
            deposit: params.deposit,
            discount: params.discount,
            final_price: params.final_price,
            gift_products_json: params.gift_products_json,
            status: "PENDIENTE".to_string(),
            customer_name: params.customer_name,
            customer_email: params.customer_email,
            customer_phone: params.customer_phone,
            created_at: Utc::now(),
        }
    }
}
