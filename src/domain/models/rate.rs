use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A named price point: full court price plus the deposit required to confirm
/// a reservation. `complex_id` is null for rates shared across all complexes.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Rate {
    pub id: String,
    pub complex_id: Option<String>,
    pub name: String,
    pub price: f64,
    pub reservation_amount: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Rate {
    pub fn new(complex_id: Option<String>, name: String, price: f64, reservation_amount: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            complex_id,
            name,
            price,
            reservation_amount,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}
