use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// A calendar date fully blocked for reservations. Scoped to one complex, or
/// global when `complex_id` is null. Reactivating a day means deleting its row.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct UnavailableDay {
    pub id: String,
    pub complex_id: Option<String>,
    pub date: NaiveDate,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl UnavailableDay {
    pub fn new(complex_id: Option<String>, date: NaiveDate, reason: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            complex_id,
            date,
            reason,
            created_at: Utc::now(),
        }
    }
}
