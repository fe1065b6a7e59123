use serde::Serialize;
use tracing::warn;

use crate::domain::models::promotion::{GiftProduct, Promotion};

/// Result of applying a promotion to a resolved base price. One promotion per
/// reservation; no stacking.
#[derive(Debug, Serialize, Clone)]
pub struct PromotionOutcome {
    pub final_price: f64,
    pub discount: f64,
    pub gift_products: Vec<GiftProduct>,
}

impl PromotionOutcome {
    fn unchanged(base_price: f64) -> Self {
        Self {
            final_price: base_price,
            discount: 0.0,
            gift_products: Vec::new(),
        }
    }
}

/// Transforms a base price according to the promotion type.
///
/// FIXED_PRICE intentionally does not clamp: a promotion value above the base
/// price yields a negative discount figure, matching the recorded behavior of
/// the booking flow. FIXED_AMOUNT_DISCOUNT is clamped so the final price never
/// goes below zero.
pub fn apply_promotion(base_price: f64, promotion: &Promotion) -> PromotionOutcome {
    match promotion.promotion_type.as_str() {
        "PERCENTAGE_DISCOUNT" => {
            let discount = base_price * (promotion.value / 100.0);
            PromotionOutcome {
                final_price: base_price - discount,
                discount,
                gift_products: Vec::new(),
            }
        }
        "FIXED_AMOUNT_DISCOUNT" => {
            let discount = promotion.value.min(base_price);
            PromotionOutcome {
                final_price: base_price - discount,
                discount,
                gift_products: Vec::new(),
            }
        }
        "FIXED_PRICE" => PromotionOutcome {
            final_price: promotion.value,
            discount: base_price - promotion.value,
            gift_products: Vec::new(),
        },
        "GIFT_PRODUCT" => PromotionOutcome {
            gift_products: promotion.gift_products(),
            ..PromotionOutcome::unchanged(base_price)
        },
        other => {
            warn!(promotion_id = %promotion.id, "Unknown promotion type {:?}, price unchanged", other);
            PromotionOutcome::unchanged(base_price)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn promo(promotion_type: &str, value: f64) -> Promotion {
        Promotion::new(
            "c1".to_string(),
            "Promo".to_string(),
            promotion_type.to_string(),
            value,
            None,
        )
    }

    #[test]
    fn test_percentage_discount() {
        let outcome = apply_promotion(5000.0, &promo("PERCENTAGE_DISCOUNT", 10.0));
        assert_eq!(outcome.discount, 500.0);
        assert_eq!(outcome.final_price, 4500.0);
        assert!(outcome.final_price <= 5000.0);

        let full = apply_promotion(5000.0, &promo("PERCENTAGE_DISCOUNT", 100.0));
        assert_eq!(full.final_price, 0.0);
    }

    #[test]
    fn test_fixed_amount_discount_clamps_at_zero() {
        let outcome = apply_promotion(5000.0, &promo("FIXED_AMOUNT_DISCOUNT", 1500.0));
        assert_eq!(outcome.discount, 1500.0);
        assert_eq!(outcome.final_price, 3500.0);

        let over = apply_promotion(1000.0, &promo("FIXED_AMOUNT_DISCOUNT", 2500.0));
        assert_eq!(over.discount, 1000.0);
        assert_eq!(over.final_price, 0.0);
    }

    #[test]
    fn test_fixed_price_override() {
        let outcome = apply_promotion(5000.0, &promo("FIXED_PRICE", 3000.0));
        assert_eq!(outcome.final_price, 3000.0);
        assert_eq!(outcome.discount, 2000.0);
    }

    #[test]
    fn test_fixed_price_above_base_keeps_negative_discount() {
        // Not clamped; the negative discount is the recorded behavior.
        let outcome = apply_promotion(5000.0, &promo("FIXED_PRICE", 6000.0));
        assert_eq!(outcome.final_price, 6000.0);
        assert_eq!(outcome.discount, -1000.0);
    }

    #[test]
    fn test_gift_product_keeps_price() {
        let mut p = promo("GIFT_PRODUCT", 0.0);
        p.gift_products_json =
            Some(r#"[{"product_id":"gatorade-500","quantity":2}]"#.to_string());

        let outcome = apply_promotion(5000.0, &p);
        assert_eq!(outcome.final_price, 5000.0);
        assert_eq!(outcome.discount, 0.0);
        assert_eq!(outcome.gift_products.len(), 1);
        assert_eq!(outcome.gift_products[0].product_id, "gatorade-500");
        assert_eq!(outcome.gift_products[0].quantity, 2);
    }

    #[test]
    fn test_unknown_type_passes_through() {
        let outcome = apply_promotion(5000.0, &promo("TWO_FOR_ONE", 50.0));
        assert_eq!(outcome.final_price, 5000.0);
        assert_eq!(outcome.discount, 0.0);
        assert!(outcome.gift_products.is_empty());
    }
}
