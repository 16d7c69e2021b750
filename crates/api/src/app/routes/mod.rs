use axum::{
    Router,
    routing::{get, post},
};

pub mod dashboard;
pub mod predict;
pub mod system;

/// Router for both front-ends: the JSON API and the HTML dashboard.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::home))
        .route("/health", get(system::health))
        .route("/predict", post(predict::run_prediction))
        .nest("/dashboard", dashboard::router())
}
