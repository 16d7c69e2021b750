//! HTTP application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: classifier artifact state shared across handlers
//! - `routes/`: HTTP routes + handlers (JSON API and HTML dashboard)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(services: services::AppServices) -> Router {
    routes::router().layer(ServiceBuilder::new().layer(Extension(Arc::new(services))))
}
