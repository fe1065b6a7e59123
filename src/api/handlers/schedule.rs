use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateScheduleRequest, UpdateScheduleRequest};
use crate::domain::models::schedule::Schedule;
use crate::error::AppError;
use std::sync::Arc;
use chrono::NaiveTime;
use tracing::info;

fn validate_window(start_time: &str, end_time: &str) -> Result<(), AppError> {
    let start = NaiveTime::parse_from_str(start_time, "%H:%M")
        .map_err(|_| AppError::Validation("Invalid start_time format (HH:MM)".into()))?;
    let end = NaiveTime::parse_from_str(end_time, "%H:%M")
        .map_err(|_| AppError::Validation("Invalid end_time format (HH:MM)".into()))?;

    // Same-day semantics. A window spanning midnight has to be stored as two
    // rows, one per day.
    if start >= end {
        return Err(AppError::Validation("start_time must be before end_time".into()));
    }
    Ok(())
}

async fn validate_rate_ids(state: &AppState, rate_ids: &[String]) -> Result<(), AppError> {
    for rate_id in rate_ids {
        state.rate_repo.find_by_id(rate_id).await?
            .ok_or_else(|| AppError::Validation(format!("Rate '{}' does not exist", rate_id)))?;
    }
    Ok(())
}

pub async fn create_schedule(
    State(state): State<Arc<AppState>>,
    Path(complex_id): Path<String>,
    Json(payload): Json<CreateScheduleRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.complex_repo.find_by_id(&complex_id).await?
        .ok_or(AppError::NotFound("Complex not found".into()))?;

    if !(0..=6).contains(&payload.day_of_week) {
        return Err(AppError::Validation("day_of_week must be between 0 (Sunday) and 6 (Saturday)".into()));
    }
    validate_window(&payload.start_time, &payload.end_time)?;
    validate_rate_ids(&state, &payload.rate_ids).await?;

    let day = state.schedule_repo.find_day(&complex_id, payload.day_of_week).await?
        .ok_or(AppError::NotFound("Schedule day not found".into()))?;

    let court_ids_json = match &payload.court_ids {
        Some(ids) => Some(serde_json::to_string(ids).map_err(|_| AppError::Internal)?),
        None => None,
    };

    let schedule = Schedule::new(
        complex_id,
        day.id,
        payload.start_time,
        payload.end_time,
        payload.sport_type,
        court_ids_json,
    );

    let created = state.schedule_repo.create(&schedule).await?;
    state.schedule_repo.set_rates(&created.id, &payload.rate_ids).await?;

    info!("Schedule created: {} ({})", created.window(), created.id);
    Ok(Json(created))
}

pub async fn list_schedules(
    State(state): State<Arc<AppState>>,
    Path(complex_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let schedules = state.schedule_repo.list_by_complex(&complex_id).await?;
    Ok(Json(schedules))
}

pub async fn get_schedule(
    State(state): State<Arc<AppState>>,
    Path(schedule_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let schedule = state.schedule_repo.find_by_id(&schedule_id).await?
        .ok_or(AppError::NotFound("Schedule not found".into()))?;

    let rates = state.schedule_repo.list_rates(&schedule.id).await?;

    let mut body = serde_json::to_value(&schedule).map_err(|_| AppError::Internal)?;
    body["rates"] = serde_json::to_value(&rates).map_err(|_| AppError::Internal)?;
    Ok(Json(body))
}

pub async fn update_schedule(
    State(state): State<Arc<AppState>>,
    Path(schedule_id): Path<String>,
    Json(payload): Json<UpdateScheduleRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut schedule = state.schedule_repo.find_by_id(&schedule_id).await?
        .ok_or(AppError::NotFound("Schedule not found".into()))?;

    if let Some(dow) = payload.day_of_week {
        if !(0..=6).contains(&dow) {
            return Err(AppError::Validation("day_of_week must be between 0 (Sunday) and 6 (Saturday)".into()));
        }
        let day = state.schedule_repo.find_day(&schedule.complex_id, dow).await?
            .ok_or(AppError::NotFound("Schedule day not found".into()))?;
        schedule.schedule_day_id = day.id;
    }

    if let Some(val) = payload.start_time { schedule.start_time = val; }
    if let Some(val) = payload.end_time { schedule.end_time = val; }
    validate_window(&schedule.start_time, &schedule.end_time)?;

    if let Some(val) = payload.sport_type { schedule.sport_type = val; }
    if let Some(ids) = &payload.court_ids {
        schedule.court_ids_json = Some(serde_json::to_string(ids).map_err(|_| AppError::Internal)?);
    }

    if let Some(rate_ids) = &payload.rate_ids {
        validate_rate_ids(&state, rate_ids).await?;
    }

    let updated = state.schedule_repo.update(&schedule).await?;

    if let Some(rate_ids) = &payload.rate_ids {
        state.schedule_repo.set_rates(&updated.id, rate_ids).await?;
    }

    info!("Schedule updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_schedule(
    State(state): State<Arc<AppState>>,
    Path(schedule_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let schedule = state.schedule_repo.find_by_id(&schedule_id).await?
        .ok_or(AppError::NotFound("Schedule not found".into()))?;

    state.schedule_repo.delete(&schedule.complex_id, &schedule.id).await?;
    info!("Schedule deleted: {}", schedule_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
