//! Shared application state.
//!
//! The only thing handlers share is the instant the process started, which
//! never changes after initialization.

use std::time::Instant;

/// Application state shared across all HTTP handlers.
#[derive(Clone, Copy, Debug)]
pub struct AppState {
    /// Monotonic start of the process, used to compute uptime.
    pub started_at: Instant,
}

impl AppState {
    /// State for a process starting now.
    pub fn new() -> Self {
        Self::with_start(Instant::now())
    }

    /// State for a process that started at `started_at`.
    pub fn with_start(started_at: Instant) -> Self {
        AppState { started_at }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
