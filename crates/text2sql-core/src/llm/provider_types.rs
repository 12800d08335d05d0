//! Model provider definitions and request parameters

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Default pretrained text-to-SQL model
pub const DEFAULT_MODEL: &str = "suriya7/t5-base-text-to-sql";

/// Where the text-to-SQL model is served from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelProvider {
    /// Hugging Face Inference API or a dedicated Inference Endpoint
    #[default]
    HuggingFace,
    /// A local Ollama server
    Ollama,
}

impl ModelProvider {
    /// Get the provider name as string
    pub fn name(&self) -> &'static str {
        match self {
            ModelProvider::HuggingFace => "huggingface",
            ModelProvider::Ollama => "ollama",
        }
    }

    /// Base URL used when none is configured
    pub fn default_base_url(&self) -> &'static str {
        match self {
            ModelProvider::HuggingFace => "https://api-inference.huggingface.co",
            ModelProvider::Ollama => "http://localhost:11434",
        }
    }
}

impl fmt::Display for ModelProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "huggingface" | "hf" | "hugging_face" => Ok(ModelProvider::HuggingFace),
            "ollama" => Ok(ModelProvider::Ollama),
            other => Err(format!(
                "Unknown model provider '{}'. Valid providers are: huggingface, ollama",
                other
            )),
        }
    }
}

/// Decoding parameters passed to the model's generation routine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Maximum output length in tokens
    #[serde(default = "GenerationParams::default_max_length")]
    pub max_length: u32,
    /// Beam search width
    #[serde(default = "GenerationParams::default_num_beams")]
    pub num_beams: u32,
    /// Stop beam search once `num_beams` finished candidates exist
    #[serde(default = "GenerationParams::default_early_stopping")]
    pub early_stopping: bool,
}

impl GenerationParams {
    const fn default_max_length() -> u32 {
        128
    }

    const fn default_num_beams() -> u32 {
        4
    }

    const fn default_early_stopping() -> bool {
        true
    }

    /// Validate generation parameters
    pub fn validate(&self) -> Result<(), String> {
        if self.max_length == 0 {
            return Err("max_length must be greater than 0".to_string());
        }
        if self.num_beams == 0 {
            return Err("num_beams must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_length: Self::default_max_length(),
            num_beams: Self::default_num_beams(),
            early_stopping: Self::default_early_stopping(),
        }
    }
}

/// Timeout configuration for model requests
///
/// - **Connection timeout**: time allowed to establish a connection
/// - **Request timeout**: time allowed for the whole request/response cycle,
///   which for a cold hosted model includes loading it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeoutConfig {
    #[serde(default = "TimeoutConfig::default_connection_timeout")]
    pub connection_timeout_secs: u64,
    #[serde(default = "TimeoutConfig::default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl TimeoutConfig {
    const fn default_connection_timeout() -> u64 {
        crate::config::timeouts::model::CONNECTION_SECS
    }

    const fn default_request_timeout() -> u64 {
        crate::config::timeouts::model::REQUEST_SECS
    }

    /// Get connection timeout as Duration
    pub fn connection_timeout(&self) -> Duration {
        Duration::from_secs(self.connection_timeout_secs)
    }

    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate timeout configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.connection_timeout_secs == 0 {
            return Err("Connection timeout must be greater than 0".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("Request timeout must be greater than 0".to_string());
        }
        if self.request_timeout_secs < self.connection_timeout_secs {
            return Err(format!(
                "Request timeout ({}s) must be >= connection timeout ({}s)",
                self.request_timeout_secs, self.connection_timeout_secs
            ));
        }
        Ok(())
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connection_timeout_secs: Self::default_connection_timeout(),
            request_timeout_secs: Self::default_request_timeout(),
        }
    }
}
