use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::error::StartupError;

/// LoggingConfig controls how we initialize tracing/logging.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,  // e.g. "info", "debug", "warn"
    pub format: String, // e.g. "json", "console"
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            format: "console".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parses `level` into a filter, case-insensitively.
    pub fn level_filter(&self) -> Result<LevelFilter, StartupError> {
        match self.level.trim().to_lowercase().as_str() {
            "trace" => Ok(LevelFilter::TRACE),
            "debug" => Ok(LevelFilter::DEBUG),
            "info" => Ok(LevelFilter::INFO),
            "warn" => Ok(LevelFilter::WARN),
            "error" => Ok(LevelFilter::ERROR),
            _ => Err(StartupError::Logging(format!(
                "invalid logging.level '{}'. Valid values: trace, debug, info, warn, error",
                self.level
            ))),
        }
    }

    /// Whether events should be written as JSON lines. Anything but "json" means console.
    pub fn is_json(&self) -> bool {
        self.format.trim().eq_ignore_ascii_case("json")
    }
}
