//! Unified provider enum

use crate::error::Text2SqlResult;
use crate::llm::model::Seq2SeqModel;
use crate::llm::provider_types::GenerationParams;
use async_trait::async_trait;

/// Unified provider enum that wraps all provider implementations
pub enum ProviderInstance {
    HuggingFace(super::HuggingFaceProvider),
    Ollama(super::OllamaProvider),
}

#[async_trait]
impl Seq2SeqModel for ProviderInstance {
    async fn generate(
        &self,
        input: &str,
        params: &GenerationParams,
    ) -> Text2SqlResult<Vec<String>> {
        match self {
            Self::HuggingFace(p) => p.generate(input, params).await,
            Self::Ollama(p) => p.generate(input, params).await,
        }
    }

    fn model_name(&self) -> String {
        match self {
            Self::HuggingFace(p) => p.model().to_string(),
            Self::Ollama(p) => p.model().to_string(),
        }
    }
}
