//! Home endpoint.

use crate::models::HomeResponse;
use crate::state::AppState;
use axum::{routing::get, Json, Router};

/// Registers the root route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(home))
}

/// Welcome message plus the list of served endpoints.
async fn home() -> Json<HomeResponse> {
    Json(HomeResponse::default())
}
