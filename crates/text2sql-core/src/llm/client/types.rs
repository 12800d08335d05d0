//! Model client type definitions

use crate::config::model::ModelConfig;
use crate::llm::provider_types::ModelProvider;
use crate::llm::providers::ProviderInstance;

/// Client for the configured text-to-SQL model.
///
/// # Examples
///
/// ```no_run
/// use text2sql_core::config::ModelConfig;
/// use text2sql_core::llm::{GenerationParams, ModelClient, Seq2SeqModel};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ModelClient::new(ModelConfig::default())?;
/// let outputs = client
///     .generate("translate English to SQL: how many users are there?", &GenerationParams::default())
///     .await?;
/// println!("{}", outputs[0]);
/// # Ok(())
/// # }
/// ```
pub struct ModelClient {
    pub(super) config: ModelConfig,
    pub(super) provider_instance: ProviderInstance,
}

impl ModelClient {
    pub fn provider(&self) -> ModelProvider {
        self.config.provider
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub fn max_retries(&self) -> u32 {
        self.config.max_retries
    }
}
