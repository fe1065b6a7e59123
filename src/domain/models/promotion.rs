use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GiftProduct {
    pub product_id: String,
    pub quantity: i32,
}

/// A discount or gift rule applied at reservation-creation time. The rule
/// never mutates the underlying rate. `promotion_type` is one of
/// PERCENTAGE_DISCOUNT, FIXED_AMOUNT_DISCOUNT, FIXED_PRICE, GIFT_PRODUCT.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Promotion {
    pub id: String,
    pub complex_id: String,
    pub name: String,
    pub promotion_type: String,
    pub value: f64,
    pub gift_products_json: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Promotion {
    pub fn new(
        complex_id: String,
        name: String,
        promotion_type: String,
        value: f64,
        gift_products_json: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            complex_id,
            name,
            promotion_type,
            value,
            gift_products_json,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    pub fn gift_products(&self) -> Vec<GiftProduct> {
        self.gift_products_json
            .as_deref()
            .and_then(|json| serde_json::from_str(json).ok())
            .unwrap_or_default()
    }
}
