use std::time::Instant;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use cicd_demo_app::routes::create_router;
use cicd_demo_app::state::AppState;
use serde_json::Value;
use tower::ServiceExt;

pub fn build_app() -> Router {
    create_router(AppState::new())
}

pub fn build_app_started_at(started_at: Instant) -> Router {
    create_router(AppState::with_start(started_at))
}

pub fn request(path: &str, method: Method) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .expect("failed to build request")
}

pub async fn send(app: &Router, path: &str, method: Method) -> Response<Body> {
    app.clone()
        .oneshot(request(path, method))
        .await
        .expect("request should complete")
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}
