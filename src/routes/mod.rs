//! HTTP route definitions and handlers.
//!
//! Three endpoint groups: home, health check and app info. Anything not
//! registered here falls through to axum's default 404/405 responses.

mod health_routes;
mod home_routes;
mod info_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Creates the application router with all configured routes.
///
/// Building the router binds nothing, so tests can drive it in process.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(home_routes::routes())
        .merge(health_routes::routes())
        .merge(info_routes::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
