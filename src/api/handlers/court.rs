use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateCourtRequest, UpdateCourtRequest};
use crate::domain::models::court::Court;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_court(
    State(state): State<Arc<AppState>>,
    Path(complex_id): Path<String>,
    Json(payload): Json<CreateCourtRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.complex_repo.find_by_id(&complex_id).await?
        .ok_or(AppError::NotFound("Complex not found".into()))?;

    let court = Court::new(complex_id, payload.name, payload.sport_type);
    let created = state.court_repo.create(&court).await?;
    info!("Court created: {} ({})", created.name, created.id);
    Ok(Json(created))
}

pub async fn list_courts(
    State(state): State<Arc<AppState>>,
    Path(complex_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let courts = state.court_repo.list_by_complex(&complex_id).await?;
    Ok(Json(courts))
}

pub async fn update_court(
    State(state): State<Arc<AppState>>,
    Path((complex_id, court_id)): Path<(String, String)>,
    Json(payload): Json<UpdateCourtRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut court = state.court_repo.find_by_id(&complex_id, &court_id).await?
        .ok_or(AppError::NotFound("Court not found".into()))?;

    if let Some(val) = payload.name { court.name = val; }
    if let Some(val) = payload.sport_type { court.sport_type = val; }
    if let Some(val) = payload.is_active { court.is_active = val; }

    let updated = state.court_repo.update(&court).await?;
    info!("Court updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_court(
    State(state): State<Arc<AppState>>,
    Path((complex_id, court_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.court_repo.delete(&complex_id, &court_id).await?;
    info!("Court deleted: {}", court_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
