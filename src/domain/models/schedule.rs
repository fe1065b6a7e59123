use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::models::rate::Rate;

/// Activation flag for one weekday of a complex. Day numbering follows the
/// calendar convention 0=Sunday .. 6=Saturday. At most one row exists per
/// (complex, weekday); all seven are seeded inactive when the complex is
/// created.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct ScheduleDay {
    pub id: String,
    pub complex_id: String,
    pub day_of_week: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl ScheduleDay {
    pub fn new(complex_id: String, day_of_week: i32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            complex_id,
            day_of_week,
            is_active: false,
            created_at: Utc::now(),
        }
    }
}

/// A recurring weekly time window `[start_time, end_time)` bound to one
/// `ScheduleDay`. Times are "HH:MM" strings with same-day semantics; a window
/// spanning midnight is stored as two rows on their respective days.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Schedule {
    pub id: String,
    pub complex_id: String,
    pub schedule_day_id: String,
    pub start_time: String,
    pub end_time: String,
    pub sport_type: String,
    pub court_ids_json: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Schedule {
    pub fn new(
        complex_id: String,
        schedule_day_id: String,
        start_time: String,
        end_time: String,
        sport_type: String,
        court_ids_json: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            complex_id,
            schedule_day_id,
            start_time,
            end_time,
            sport_type,
            court_ids_json,
            created_at: Utc::now(),
        }
    }

    pub fn court_ids(&self) -> Vec<String> {
        self.court_ids_json
            .as_deref()
            .and_then(|json| serde_json::from_str(json).ok())
            .unwrap_or_default()
    }

    /// The window rendered in the wire format used by reserves and quotes.
    pub fn window(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }
}

/// A schedule together with its attached rates in persisted order. Assembled
/// by handlers before handing over to the pricing resolver.
#[derive(Debug, Clone)]
pub struct ScheduleWithRates {
    pub schedule: Schedule,
    pub rates: Vec<Rate>,
}
