use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateRateRequest, UpdateRateRequest};
use crate::domain::models::rate::Rate;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

fn validate_amounts(price: f64, reservation_amount: f64) -> Result<(), AppError> {
    if price < 0.0 || reservation_amount < 0.0 {
        return Err(AppError::Validation("price and reservation_amount must be non-negative".into()));
    }
    Ok(())
}

pub async fn create_rate(
    State(state): State<Arc<AppState>>,
    Path(complex_id): Path<String>,
    Json(payload): Json<CreateRateRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.complex_repo.find_by_id(&complex_id).await?
        .ok_or(AppError::NotFound("Complex not found".into()))?;

    validate_amounts(payload.price, payload.reservation_amount)?;

    let rate = Rate::new(Some(complex_id), payload.name, payload.price, payload.reservation_amount);
    let created = state.rate_repo.create(&rate).await?;
    info!("Rate created: {} ({})", created.name, created.id);
    Ok(Json(created))
}

/// Rates without a complex apply to every complex.
pub async fn create_global_rate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateRateRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_amounts(payload.price, payload.reservation_amount)?;

    let rate = Rate::new(None, payload.name, payload.price, payload.reservation_amount);
    let created = state.rate_repo.create(&rate).await?;
    info!("Global rate created: {} ({})", created.name, created.id);
    Ok(Json(created))
}

pub async fn list_rates(
    State(state): State<Arc<AppState>>,
    Path(complex_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let rates = state.rate_repo.list_for_complex(&complex_id).await?;
    Ok(Json(rates))
}

pub async fn update_rate(
    State(state): State<Arc<AppState>>,
    Path(rate_id): Path<String>,
    Json(payload): Json<UpdateRateRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut rate = state.rate_repo.find_by_id(&rate_id).await?
        .ok_or(AppError::NotFound("Rate not found".into()))?;

    if let Some(val) = payload.name { rate.name = val; }
    if let Some(val) = payload.price { rate.price = val; }
    if let Some(val) = payload.reservation_amount { rate.reservation_amount = val; }
    if let Some(val) = payload.is_active { rate.is_active = val; }
    validate_amounts(rate.price, rate.reservation_amount)?;

    let updated = state.rate_repo.update(&rate).await?;
    info!("Rate updated: {}", updated.id);
    Ok(Json(updated))
}

/// Rates stay referenced by schedules and historical reserves, so deletion is
/// a soft-delete.
pub async fn delete_rate(
    State(state): State<Arc<AppState>>,
    Path(rate_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.rate_repo.deactivate(&rate_id).await?;
    info!("Rate deactivated: {}", rate_id);
    Ok(Json(serde_json::json!({"status": "deactivated"})))
}
