use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use codrisk_core::ValidationError;

/// Standard shape for client errors: `{"error": <code>, "message": <text>}`.
pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// 400 response for a failed field validation; names the offending field and
/// carries the full error text (including the allowed category list).
pub fn validation_error_to_response(err: ValidationError) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        axum::Json(json!({
            "error": "validation_error",
            "field": err.field(),
            "message": err.to_string(),
        })),
    )
        .into_response()
}

/// 500 response in the `{"detail": <message>}` shape the prediction API
/// contract specifies for internal failures.
pub fn internal_error(message: impl Into<String>) -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(json!({ "detail": message.into() })),
    )
        .into_response()
}
