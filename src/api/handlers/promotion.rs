use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreatePromotionRequest, UpdatePromotionRequest};
use crate::domain::models::promotion::{GiftProduct, Promotion};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

fn validate_promotion_type(promotion_type: &str) -> Result<(), AppError> {
    match promotion_type {
        "PERCENTAGE_DISCOUNT" | "FIXED_AMOUNT_DISCOUNT" | "FIXED_PRICE" | "GIFT_PRODUCT" => Ok(()),
        _ => Err(AppError::Validation("Invalid promotion_type".into())),
    }
}

fn encode_gift_products(
    promotion_type: &str,
    gift_products: &Option<Vec<GiftProduct>>,
) -> Result<Option<String>, AppError> {
    if promotion_type == "GIFT_PRODUCT" {
        let gifts = gift_products.as_ref().filter(|g| !g.is_empty())
            .ok_or(AppError::Validation("GIFT_PRODUCT promotions require at least one gift product".into()))?;
        return Ok(Some(serde_json::to_string(gifts).map_err(|_| AppError::Internal)?));
    }

    match gift_products {
        Some(gifts) => Ok(Some(serde_json::to_string(gifts).map_err(|_| AppError::Internal)?)),
        None => Ok(None),
    }
}

pub async fn create_promotion(
    State(state): State<Arc<AppState>>,
    Path(complex_id): Path<String>,
    Json(payload): Json<CreatePromotionRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.complex_repo.find_by_id(&complex_id).await?
        .ok_or(AppError::NotFound("Complex not found".into()))?;

    validate_promotion_type(&payload.promotion_type)?;
    if payload.value < 0.0 {
        return Err(AppError::Validation("value must be non-negative".into()));
    }

    let gift_products_json = encode_gift_products(&payload.promotion_type, &payload.gift_products)?;

    let promotion = Promotion::new(
        complex_id,
        payload.name,
        payload.promotion_type,
        payload.value,
        gift_products_json,
    );

    let created = state.promotion_repo.create(&promotion).await?;
    info!("Promotion created: {} ({})", created.name, created.id);
    Ok(Json(created))
}

pub async fn list_promotions(
    State(state): State<Arc<AppState>>,
    Path(complex_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let promotions = state.promotion_repo.list_by_complex(&complex_id).await?;
    Ok(Json(promotions))
}

pub async fn get_promotion(
    State(state): State<Arc<AppState>>,
    Path(promotion_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let promotion = state.promotion_repo.find_by_id(&promotion_id).await?
        .ok_or(AppError::NotFound("Promotion not found".into()))?;
    Ok(Json(promotion))
}

pub async fn update_promotion(
    State(state): State<Arc<AppState>>,
    Path(promotion_id): Path<String>,
    Json(payload): Json<UpdatePromotionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut promotion = state.promotion_repo.find_by_id(&promotion_id).await?
        .ok_or(AppError::NotFound("Promotion not found".into()))?;

    if let Some(val) = payload.name { promotion.name = val; }
    if let Some(val) = payload.promotion_type {
        validate_promotion_type(&val)?;
        promotion.promotion_type = val;
    }
    if let Some(val) = payload.value {
        if val < 0.0 {
            return Err(AppError::Validation("value must be non-negative".into()));
        }
        promotion.value = val;
    }
    if payload.gift_products.is_some() || promotion.promotion_type == "GIFT_PRODUCT" {
        let gifts = payload.gift_products.or_else(|| {
            let existing = promotion.gift_products();
            if existing.is_empty() { None } else { Some(existing) }
        });
        promotion.gift_products_json = encode_gift_products(&promotion.promotion_type, &gifts)?;
    }
    if let Some(val) = payload.is_active { promotion.is_active = val; }

    let updated = state.promotion_repo.update(&promotion).await?;
    info!("Promotion updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_promotion(
    State(state): State<Arc<AppState>>,
    Path(promotion_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.promotion_repo.delete(&promotion_id).await?;
    info!("Promotion deleted: {}", promotion_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
