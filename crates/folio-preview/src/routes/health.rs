//! Health check endpoint.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    posts: usize,
}

/// Public health check endpoint.
///
/// Returns basic service health for load balancer health checks.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "folio-preview",
        version: env!("CARGO_PKG_VERSION"),
        posts: state.dispatcher.registry().list_all().len(),
    })
}
