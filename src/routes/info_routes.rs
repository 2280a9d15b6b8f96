//! Application info endpoint.

use crate::models::InfoResponse;
use crate::state::AppState;
use axum::{routing::get, Json, Router};

/// Registers the info routes under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/info", get(app_info))
}

/// Name, version and the compiler the binary was built with.
async fn app_info() -> Json<InfoResponse> {
    Json(InfoResponse::default())
}
