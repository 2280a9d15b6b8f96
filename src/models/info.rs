use serde::Serialize;

use super::APP_VERSION;

/// Compiler version captured by the build script.
pub const RUNTIME_VERSION: &str = match option_env!("RUSTC_VERSION") {
    Some(version) => version,
    None => "unknown",
};

/// Body of `GET /api/info`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub runtime_version: &'static str,
}

impl Default for InfoResponse {
    fn default() -> Self {
        InfoResponse {
            name: "CI/CD Demo App",
            version: APP_VERSION,
            description: "Simple Rust app with Jenkins CI/CD pipeline",
            runtime_version: RUNTIME_VERSION,
        }
    }
}
