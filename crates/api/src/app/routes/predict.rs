use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use crate::app::services::{self, AppServices, ArtifactState};
use crate::app::{dto, errors};

/// `POST /predict` — validate, classify, decide.
pub async fn run_prediction(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::PredictRequest>,
) -> axum::response::Response {
    let features = match body.validate() {
        Ok(f) => f,
        Err(e) => {
            tracing::warn!(field = e.field(), error = %e, "prediction request failed validation");
            return errors::validation_error_to_response(e);
        }
    };

    let classifier = match &services.artifact {
        ArtifactState::Ready(c) => c.clone(),
        ArtifactState::Unavailable(reason) => {
            return errors::internal_error(format!("classifier unavailable: {reason}"));
        }
    };

    match services::predict_guarded(classifier, features).await {
        Ok(prediction) => {
            tracing::info!(
                verdict = prediction.verdict.label(),
                risk_probability = prediction.risk_probability,
                "prediction served"
            );
            (StatusCode::OK, Json(dto::prediction_to_json(&prediction))).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "classifier invocation failed");
            errors::internal_error(e.to_string())
        }
    }
}
