use serde::Deserialize;

use codrisk_core::{OrderFeatures, ValidationError};
use codrisk_inference::Prediction;

// -------------------------
// Request DTOs
// -------------------------

/// Raw prediction request body.
///
/// Field names match the original wire schema exactly, including the
/// capital-M `Month` and `date` for day-of-month.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub price: i64,
    pub qty_ordered: i64,
    pub category_name_1: String,
    #[serde(rename = "Month")]
    pub month: i64,
    pub date: i64,
}

impl PredictRequest {
    /// Validate into domain features; the classifier is never reached when
    /// this fails.
    pub fn validate(&self) -> Result<OrderFeatures, ValidationError> {
        OrderFeatures::new(
            self.price,
            self.qty_ordered,
            &self.category_name_1,
            self.month,
            self.date,
        )
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn prediction_to_json(p: &Prediction) -> serde_json::Value {
    serde_json::json!({
        "predictions": {
            "prediction": p.verdict.label(),
            "probability_of_cancellation": p.probability_display(),
        }
    })
}
