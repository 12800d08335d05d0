//! Logging configuration

use serde::{Deserialize, Serialize};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or filter directive (trace, debug, info, warn, error)
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
    /// Log format (json, pretty, compact)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl LoggingConfig {
    fn default_level() -> String {
        "warn".to_string()
    }

    fn default_format() -> String {
        "compact".to_string()
    }

    /// Validate the format name
    pub fn validate(&self) -> Result<(), String> {
        match self.format.as_str() {
            "json" | "pretty" | "compact" => Ok(()),
            other => Err(format!(
                "Unknown log format '{}'. Valid formats are: json, pretty, compact",
                other
            )),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
            format: Self::default_format(),
        }
    }
}
