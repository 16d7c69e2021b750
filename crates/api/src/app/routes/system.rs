use axum::{Json, http::StatusCode, response::IntoResponse};

/// Liveness message, kept byte-compatible with the original API root.
pub async fn home() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "API is Running" }))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}
