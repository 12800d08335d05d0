//! Ollama provider implementation

use crate::config::model::ModelConfig;
use crate::error::Text2SqlResult;
use crate::llm::provider_types::GenerationParams;
use crate::llm::providers::error_utils::{parse_error, send_error, status_error};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

const PROVIDER: &str = "Ollama";

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Ollama provider handler
pub struct OllamaProvider {
    config: ModelConfig,
    http_client: Client,
}

impl OllamaProvider {
    /// Create a new Ollama provider
    pub fn new(config: ModelConfig, http_client: Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Ollama completion (non-streaming)
    #[instrument(skip(self, input, params), fields(model = %self.config.model), level = "debug")]
    pub async fn generate(
        &self,
        input: &str,
        params: &GenerationParams,
    ) -> Text2SqlResult<Vec<String>> {
        let url = format!("{}/api/generate", self.config.effective_base_url());

        if params.num_beams > 1 {
            tracing::debug!(
                num_beams = params.num_beams,
                "Ollama has no beam search; using its default sampler"
            );
        }

        let request_body = json!({
            "model": self.config.model,
            "prompt": input,
            "stream": false,
            "options": {
                "num_predict": params.max_length,
                "temperature": 0,
            },
        });

        tracing::debug!(
            "Ollama API request: {}",
            serde_json::to_string_pretty(&request_body).unwrap_or_default()
        );

        let mut request = self.http_client.post(&url).json(&request_body);
        if let Some(api_key) = &self.config.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await.map_err(|e| {
            send_error(e, PROVIDER, self.config.timeouts.request_timeout_secs)
        })?;

        if !response.status().is_success() {
            return Err(status_error(response, PROVIDER, &self.config.model).await);
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| parse_error(e, PROVIDER, &self.config.model))?;

        tracing::debug!("Ollama API response: {}", body.response);

        Ok(vec![body.response])
    }
}
