//! Model client constructor

use super::types::ModelClient;
use crate::config::model::ModelConfig;
use crate::error::{Text2SqlError, Text2SqlResult};
use crate::llm::provider_types::ModelProvider;
use crate::llm::providers::{HuggingFaceProvider, OllamaProvider, ProviderInstance};
use reqwest::Client;
use tracing::debug;

impl ModelClient {
    /// Create a new model client.
    ///
    /// Validates the timeout settings, builds the HTTP client and the
    /// provider selected by `config.provider`.
    pub fn new(config: ModelConfig) -> Text2SqlResult<Self> {
        config.timeouts.validate().map_err(|e| {
            Text2SqlError::config_with_context(
                format!("Invalid model timeouts: {}", e),
                format!("Validating configuration for provider '{}'", config.provider),
            )
        })?;

        let http_client = Client::builder()
            .connect_timeout(config.timeouts.connection_timeout())
            .timeout(config.timeouts.request_timeout())
            .user_agent(concat!("text2sql/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                Text2SqlError::config(format!("Failed to create HTTP client: {}", e))
            })?;

        debug!(
            "Created model client for provider '{}' (model '{}') with timeouts: connection={}s, request={}s",
            config.provider,
            config.model,
            config.timeouts.connection_timeout_secs,
            config.timeouts.request_timeout_secs
        );

        let provider_instance = match config.provider {
            ModelProvider::HuggingFace => ProviderInstance::HuggingFace(HuggingFaceProvider::new(
                config.clone(),
                http_client,
            )),
            ModelProvider::Ollama => {
                ProviderInstance::Ollama(OllamaProvider::new(config.clone(), http_client))
            }
        };

        Ok(Self {
            config,
            provider_instance,
        })
    }
}
