use std::collections::BTreeMap;

use serde::Serialize;

use super::APP_VERSION;

/// Paths served by the app and their human-readable descriptions.
pub const ENDPOINTS: [(&str, &str); 3] = [
    ("/", "Home"),
    ("/health", "Health check"),
    ("/api/info", "App info"),
];

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct HomeResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

impl Default for HomeResponse {
    fn default() -> Self {
        HomeResponse {
            message: "Hello World! CI/CD Pipeline Demo",
            version: APP_VERSION,
            endpoints: ENDPOINTS.into_iter().collect(),
        }
    }
}
