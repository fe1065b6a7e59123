use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateComplexRequest, SetScheduleDayRequest, UpdateComplexRequest};
use crate::domain::models::complex::Complex;
use crate::domain::models::schedule::ScheduleDay;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_complex(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateComplexRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Name must not be empty".into()));
    }

    let complex = Complex::new(payload.name, payload.address, payload.phone);
    let created = state.complex_repo.create(&complex).await?;

    // Seed the weekly grid: one row per weekday, inactive until staff opens it.
    for day_of_week in 0..7 {
        let day = ScheduleDay::new(created.id.clone(), day_of_week);
        state.schedule_repo.create_day(&day).await?;
    }

    info!("Complex created: {} ({})", created.name, created.id);
    Ok(Json(created))
}

pub async fn list_complexes(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let complexes = state.complex_repo.list().await?;
    Ok(Json(complexes))
}

pub async fn get_complex(
    State(state): State<Arc<AppState>>,
    Path(complex_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let complex = state.complex_repo.find_by_id(&complex_id).await?
        .ok_or(AppError::NotFound("Complex not found".into()))?;
    Ok(Json(complex))
}

pub async fn update_complex(
    State(state): State<Arc<AppState>>,
    Path(complex_id): Path<String>,
    Json(payload): Json<UpdateComplexRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut complex = state.complex_repo.find_by_id(&complex_id).await?
        .ok_or(AppError::NotFound("Complex not found".into()))?;

    if let Some(val) = payload.name { complex.name = val; }
    if let Some(val) = payload.address { complex.address = val; }
    if let Some(val) = payload.phone { complex.phone = Some(val); }
    if let Some(val) = payload.is_active { complex.is_active = val; }

    let updated = state.complex_repo.update(&complex).await?;
    info!("Complex updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_complex(
    State(state): State<Arc<AppState>>,
    Path(complex_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.complex_repo.delete(&complex_id).await?;
    info!("Complex deleted: {}", complex_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

pub async fn list_schedule_days(
    State(state): State<Arc<AppState>>,
    Path(complex_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.complex_repo.find_by_id(&complex_id).await?
        .ok_or(AppError::NotFound("Complex not found".into()))?;

    let days = state.schedule_repo.list_days(&complex_id).await?;
    Ok(Json(days))
}

pub async fn set_schedule_day(
    State(state): State<Arc<AppState>>,
    Path((complex_id, day_of_week)): Path<(String, i32)>,
    Json(payload): Json<SetScheduleDayRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !(0..=6).contains(&day_of_week) {
        return Err(AppError::Validation("day_of_week must be between 0 (Sunday) and 6 (Saturday)".into()));
    }

    let updated = state.schedule_repo
        .set_day_active(&complex_id, day_of_week, payload.is_active)
        .await?;

    info!("Schedule day {} of complex {} set active={}", day_of_week, complex_id, payload.is_active);
    Ok(Json(updated))
}
