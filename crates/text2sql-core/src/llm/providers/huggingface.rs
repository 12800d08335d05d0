//! Hugging Face inference provider
//!
//! Talks to the serverless Inference API (or anything exposing the same
//! `POST /models/{model}` contract) for text2text-generation models such as
//! T5 fine-tunes.

use crate::config::model::ModelConfig;
use crate::error::{Text2SqlError, Text2SqlResult};
use crate::llm::provider_types::GenerationParams;
use crate::llm::providers::error_utils::{
    parse_error, sanitize_error_text, send_error, status_error,
};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::instrument;

const PROVIDER: &str = "Hugging Face";

#[derive(Debug, Deserialize)]
struct Generation {
    generated_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Batch(Vec<Generation>),
    Single(Generation),
    Error { error: String },
}

/// Hugging Face provider handler
pub struct HuggingFaceProvider {
    config: ModelConfig,
    http_client: Client,
}

impl HuggingFaceProvider {
    /// Create a new Hugging Face provider
    pub fn new(config: ModelConfig, http_client: Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}",
            self.config.effective_base_url(),
            self.config.model
        )
    }

    fn request_body(input: &str, params: &GenerationParams) -> Value {
        json!({
            "inputs": input,
            "parameters": {
                "max_length": params.max_length,
                "num_beams": params.num_beams,
                "early_stopping": params.early_stopping,
                "num_return_sequences": 1,
            },
            "options": {
                "wait_for_model": true,
                "use_cache": false,
            },
        })
    }

    /// Run text2text generation
    #[instrument(skip(self, input, params), fields(model = %self.config.model), level = "debug")]
    pub async fn generate(
        &self,
        input: &str,
        params: &GenerationParams,
    ) -> Text2SqlResult<Vec<String>> {
        let url = self.endpoint();
        let request_body = Self::request_body(input, params);

        tracing::debug!(
            "Hugging Face API request: {}",
            serde_json::to_string_pretty(&request_body).unwrap_or_default()
        );

        let mut request = self
            .http_client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request_body);
        if let Some(api_key) = &self.config.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await.map_err(|e| {
            send_error(e, PROVIDER, self.config.timeouts.request_timeout_secs)
        })?;

        if !response.status().is_success() {
            return Err(status_error(response, PROVIDER, &self.config.model).await);
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| parse_error(e, PROVIDER, &self.config.model))?;

        tracing::debug!("Hugging Face API response: {}", body);

        match serde_json::from_value::<InferenceResponse>(body)
            .map_err(|e| parse_error(e, PROVIDER, &self.config.model))?
        {
            InferenceResponse::Batch(generations) => Ok(generations
                .into_iter()
                .map(|g| g.generated_text)
                .collect()),
            InferenceResponse::Single(generation) => Ok(vec![generation.generated_text]),
            InferenceResponse::Error { error } => Err(Text2SqlError::Model {
                message: format!("{} API error: {}", PROVIDER, sanitize_error_text(&error)),
                model: Some(self.config.model.clone()),
                status_code: None,
            }),
        }
    }
}
