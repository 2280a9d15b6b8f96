//! Response bodies served by the HTTP endpoints.
//!
//! Every body is built fresh per request; nothing here is stored.

pub mod health;
pub mod home;
pub mod info;

pub use health::HealthResponse;
pub use home::HomeResponse;
pub use info::InfoResponse;

/// Service identifier reported by `/health` and attached to JSON log records.
pub const SERVICE_NAME: &str = "demo-app";

/// Application version reported by `/` and `/api/info`.
pub const APP_VERSION: &str = "1.0.0";
