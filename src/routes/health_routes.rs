//! Health check endpoints.

use crate::models::HealthResponse;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};

/// Registers health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Liveness probe.
///
/// Reads only the process clock, so it answers even when nothing else works.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::since(state.started_at))
}
