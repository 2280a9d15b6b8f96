use std::time::{Duration, Instant};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::SERVICE_NAME;

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// ISO-8601, millisecond precision, `Z` suffix.
    pub timestamp: String,
    /// Seconds since process start.
    pub uptime: f64,
    pub service: &'static str,
}

impl HealthResponse {
    /// Snapshot taken now for a process that started at `started_at`.
    pub fn since(started_at: Instant) -> Self {
        Self::at(Utc::now(), started_at.elapsed())
    }

    pub fn at(now: DateTime<Utc>, uptime: Duration) -> Self {
        HealthResponse {
            status: "healthy",
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            uptime: uptime.as_secs_f64(),
            service: SERVICE_NAME,
        }
    }
}
