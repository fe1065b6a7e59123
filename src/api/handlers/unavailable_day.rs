use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::CreateUnavailableDayRequest;
use crate::domain::models::unavailable_day::UnavailableDay;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_unavailable_day(
    State(state): State<Arc<AppState>>,
    Path(complex_id): Path<String>,
    Json(payload): Json<CreateUnavailableDayRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.complex_repo.find_by_id(&complex_id).await?
        .ok_or(AppError::NotFound("Complex not found".into()))?;

    let day = UnavailableDay::new(Some(complex_id), payload.date, payload.reason);
    let created = state.unavailable_day_repo.create(&day).await?;
    info!("Blocked {} for complex {:?}", created.date, created.complex_id);
    Ok(Json(created))
}

/// Blocks the date across every complex (e.g. a national holiday).
pub async fn create_global_unavailable_day(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateUnavailableDayRequest>,
) -> Result<impl IntoResponse, AppError> {
    let day = UnavailableDay::new(None, payload.date, payload.reason);
    let created = state.unavailable_day_repo.create(&day).await?;
    info!("Blocked {} globally", created.date);
    Ok(Json(created))
}

pub async fn list_unavailable_days(
    State(state): State<Arc<AppState>>,
    Path(complex_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let days = state.unavailable_day_repo.list_for_complex(&complex_id).await?;
    Ok(Json(days))
}

/// Deleting the row reactivates the date.
pub async fn delete_unavailable_day(
    State(state): State<Arc<AppState>>,
    Path(day_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.unavailable_day_repo.delete(&day_id).await?;
    info!("Unavailable day removed: {}", day_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
