use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Court {
    pub id: String,
    pub complex_id: String,
    pub name: String,
    pub sport_type: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Court {
    pub fn new(complex_id: String, name: String, sport_type: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            complex_id,
            name,
            sport_type,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}
