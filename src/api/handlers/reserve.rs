use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateReserveRequest, UpdateReserveRequest};
use crate::api::dtos::responses::PricingQuoteResponse;
use crate::domain::models::reserve::{NewReserveParams, Reserve};
use crate::domain::models::schedule::ScheduleWithRates;
use crate::domain::services::availability::{day_of_week, is_day_open, is_valid_end_time};
use crate::domain::services::pricing::resolve_price;
use crate::domain::services::promotions::apply_promotion;
use crate::error::AppError;
use std::collections::HashMap;
use std::sync::Arc;
use chrono::{Duration, NaiveDate};
use tracing::{info, warn};

async fn schedules_for_day(
    state: &AppState,
    complex_id: &str,
    dow: i32,
) -> Result<Vec<ScheduleWithRates>, AppError> {
    let schedules = state.schedule_repo.list_by_day(complex_id, dow).await?;

    let mut windows = Vec::with_capacity(schedules.len());
    for schedule in schedules {
        let rates = state.schedule_repo.list_rates(&schedule.id).await?;
        windows.push(ScheduleWithRates { schedule, rates });
    }
    Ok(windows)
}

pub async fn create_reserve(
    State(state): State<Arc<AppState>>,
    Path(complex_id): Path<String>,
    Json(payload): Json<CreateReserveRequest>,
) -> Result<impl IntoResponse, AppError> {
    let complex = state.complex_repo.find_by_id(&complex_id).await?
        .ok_or(AppError::NotFound("Complex not found".into()))?;

    let date = NaiveDate::parse_from_str(&payload.date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format".into()))?;

    // Hour-grained selection check: hours 00-05 belong to the next day, so an
    // end time there only rolls over from a daytime start.
    if let Some((start_str, end_str)) = payload.schedule.split_once(" - ")
        && !is_valid_end_time(end_str, start_str) {
        return Err(AppError::Validation("End time is not reachable from the start time".into()));
    }

    let court = state.court_repo.find_by_id(&complex.id, &payload.court_id).await?
        .ok_or(AppError::NotFound("Court not found".into()))?;
    if !court.is_active {
        return Err(AppError::Conflict("Court is not active".into()));
    }

    let schedule_days = state.schedule_repo.list_days(&complex.id).await?;
    let unavailable_days = state.unavailable_day_repo.list_for_complex(&complex.id).await?;

    if !is_day_open(date, &schedule_days, &unavailable_days) {
        warn!("Reserve rejected: {} is not open for complex {}", date, complex.id);
        return Err(AppError::Conflict("Date is not available for booking".into()));
    }

    let windows = schedules_for_day(&state, &complex.id, day_of_week(date)).await?;

    let resolved = resolve_price(date, &payload.schedule, &windows, &schedule_days)
        .ok_or(AppError::Conflict("No pricing available for the requested time range".into()))?;

    let mut promotion_id = None;
    let mut discount = 0.0;
    let mut final_price = resolved.price;
    let mut gift_products_json = None;

    if let Some(ref id) = payload.promotion_id {
        let promotion = state.promotion_repo.find_by_id(id).await?
            .ok_or(AppError::NotFound("Promotion not found".into()))?;

        if promotion.complex_id != complex.id {
            return Err(AppError::Validation("Promotion does not belong to this complex".into()));
        }
        if !promotion.is_active {
            return Err(AppError::Conflict("Promotion is not active".into()));
        }

        let outcome = apply_promotion(resolved.price, &promotion);
        discount = outcome.discount;
        final_price = outcome.final_price;
        if !outcome.gift_products.is_empty() {
            gift_products_json = Some(
                serde_json::to_string(&outcome.gift_products).map_err(|_| AppError::Internal)?
            );
        }
        promotion_id = Some(promotion.id);
    }

    let reserve = Reserve::new(NewReserveParams {
        complex_id: complex.id.clone(),
        court_id: court.id,
        promotion_id,
        date,
        schedule: resolved.schedule.clone(),
        price: resolved.price,
        deposit: resolved.reservation_amount,
        discount,
        final_price,
        gift_products_json,
        customer_name: payload.customer_name,
        customer_email: payload.customer_email,
        customer_phone: payload.customer_phone,
    });

    // The UNIQUE(court_id, date, schedule) constraint turns a double booking
    // into a 409 here.
    let created = state.reserve_repo.create(&reserve).await?;

    info!("Reserve confirmed: {} on {} {}", created.id, created.date, created.schedule);
    Ok(Json(created))
}

pub async fn list_reserves(
    State(state): State<Arc<AppState>>,
    Path(complex_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let reserves = if let Some(date_str) = params.get("date") {
        let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .map_err(|_| AppError::Validation("Invalid date format".into()))?;
        state.reserve_repo.list_by_date(&complex_id, date).await?
    } else {
        state.reserve_repo.list_by_complex(&complex_id).await?
    };

    Ok(Json(reserves))
}

pub async fn get_reserve(
    State(state): State<Arc<AppState>>,
    Path(reserve_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let reserve = state.reserve_repo.find_by_id(&reserve_id).await?
        .ok_or(AppError::NotFound("Reserve not found".into()))?;
    Ok(Json(reserve))
}

pub async fn update_reserve(
    State(state): State<Arc<AppState>>,
    Path(reserve_id): Path<String>,
    Json(payload): Json<UpdateReserveRequest>,
) -> Result<impl IntoResponse, AppError> {
    match payload.status.as_str() {
        "PENDIENTE" | "APROBADO" | "RECHAZADO" | "CANCELADO" => {},
        _ => return Err(AppError::Validation("Invalid status".into())),
    }

    let updated = state.reserve_repo.update_status(&reserve_id, &payload.status).await?;
    info!("Reserve {} moved to {}", updated.id, updated.status);
    Ok(Json(updated))
}

pub async fn delete_reserve(
    State(state): State<Arc<AppState>>,
    Path(reserve_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.reserve_repo.delete(&reserve_id).await?;
    info!("Reserve deleted: {}", reserve_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

pub async fn get_available_dates(
    State(state): State<Arc<AppState>>,
    Path(complex_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    state.complex_repo.find_by_id(&complex_id).await?
        .ok_or(AppError::NotFound("Complex not found".into()))?;

    let start_str = params.get("start").ok_or(AppError::Validation("start required".into()))?;
    let end_str = params.get("end").ok_or(AppError::Validation("end required".into()))?;

    let start_date = NaiveDate::parse_from_str(start_str, "%Y-%m-%d").map_err(|_| AppError::Validation("Invalid start".into()))?;
    let end_date = NaiveDate::parse_from_str(end_str, "%Y-%m-%d").map_err(|_| AppError::Validation("Invalid end".into()))?;

    let schedule_days = state.schedule_repo.list_days(&complex_id).await?;
    let unavailable_days = state.unavailable_day_repo.list_for_complex(&complex_id).await?;
    let schedules = state.schedule_repo.list_by_complex(&complex_id).await?;

    let mut available_dates = Vec::new();
    let mut current_date = start_date;

    while current_date <= end_date {
        if is_day_open(current_date, &schedule_days, &unavailable_days) {
            let dow = day_of_week(current_date);
            let has_windows = schedule_days.iter()
                .find(|d| d.day_of_week == dow)
                .map(|d| schedules.iter().any(|s| s.schedule_day_id == d.id))
                .unwrap_or(false);

            if has_windows {
                available_dates.push(current_date.to_string());
            }
        }
        current_date += Duration::days(1);
    }

    Ok(Json(available_dates))
}

pub async fn quote_pricing(
    State(state): State<Arc<AppState>>,
    Path(complex_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    state.complex_repo.find_by_id(&complex_id).await?
        .ok_or(AppError::NotFound("Complex not found".into()))?;

    let date_str = params.get("date").ok_or(AppError::Validation("date required".into()))?;
    let range = params.get("range").ok_or(AppError::Validation("range required".into()))?;

    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format".into()))?;

    let schedule_days = state.schedule_repo.list_days(&complex_id).await?;
    let unavailable_days = state.unavailable_day_repo.list_for_complex(&complex_id).await?;

    let pricing = if is_day_open(date, &schedule_days, &unavailable_days) {
        let windows = schedules_for_day(&state, &complex_id, day_of_week(date)).await?;
        resolve_price(date, range, &windows, &schedule_days)
    } else {
        None
    };

    Ok(Json(PricingQuoteResponse {
        date: date_str.clone(),
        range: range.clone(),
        pricing,
    }))
}
