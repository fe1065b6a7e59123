use serde::Serialize;

use crate::domain::services::pricing::ResolvedPrice;

#[derive(Serialize)]
pub struct PricingQuoteResponse {
    pub date: String,
    pub range: String,
    /// `null` when the slot is closed, unmatched, or unpriced.
    pub pricing: Option<ResolvedPrice>,
}

#[derive(Serialize)]
pub struct AvailableDatesResponse {
    pub dates: Vec<String>,
}
