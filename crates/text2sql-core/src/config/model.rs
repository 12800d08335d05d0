//! Configuration data model

use crate::config::logging_config::LoggingConfig;
use crate::config::timeouts;
use crate::database::redact_url;
use crate::llm::provider_types::{DEFAULT_MODEL, GenerationParams, ModelProvider, TimeoutConfig};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Copy safe to print: API key masked, database password removed
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        config.model.api_key = config.model.api_key.as_deref().map(mask_api_key);
        config.database.url = config.database.url.as_deref().map(redact_url);
        config
    }
}

/// Text-to-SQL model settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub provider: ModelProvider,
    /// Model identifier, e.g. `suriya7/t5-base-text-to-sql`
    #[serde(default = "ModelConfig::default_model")]
    pub model: String,
    /// Overrides the provider's default endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default)]
    pub generation: GenerationParams,
    #[serde(default)]
    pub timeouts: TimeoutConfig,
    /// Extra attempts for retryable failures; 0 means a single attempt
    #[serde(default)]
    pub max_retries: u32,
}

impl ModelConfig {
    fn default_model() -> String {
        DEFAULT_MODEL.to_string()
    }

    /// Configured base URL or the provider default, without trailing slash
    pub fn effective_base_url(&self) -> String {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.provider.default_base_url())
            .trim_end_matches('/')
            .to_string()
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            provider: ModelProvider::default(),
            model: Self::default_model(),
            base_url: None,
            api_key: None,
            generation: GenerationParams::default(),
            timeouts: TimeoutConfig::default(),
            max_retries: 0,
        }
    }
}

/// Database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection URI (`postgres://...`, `sqlite://...`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Reject anything that is not a query before connecting
    #[serde(default)]
    pub read_only: bool,
    #[serde(default = "DatabaseConfig::default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

impl DatabaseConfig {
    const fn default_connect_timeout() -> u64 {
        timeouts::database::CONNECT_SECS
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            read_only: false,
            connect_timeout_secs: Self::default_connect_timeout(),
        }
    }
}

/// Mask an API key for display, keeping a short prefix and suffix
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let len = chars.len();
    if len <= 12 {
        return "*".repeat(len);
    }

    let prefix: String = chars[..6].iter().collect();
    let suffix: String = chars[len - 4..].iter().collect();
    format!("{}{}...{}", prefix, "*".repeat((len - 10).min(8)), suffix)
}
