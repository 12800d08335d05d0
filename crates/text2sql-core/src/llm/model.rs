//! The seam between translation and whatever serves the model

use crate::error::Text2SqlResult;
use crate::llm::provider_types::GenerationParams;
use async_trait::async_trait;

/// A sequence-to-sequence model with a generation routine.
///
/// `generate` receives the fully formatted model input and returns the
/// decoded output sequences, best candidate first.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Seq2SeqModel: Send + Sync {
    async fn generate(&self, input: &str, params: &GenerationParams)
    -> Text2SqlResult<Vec<String>>;

    /// Identifier of the model behind this handle
    fn model_name(&self) -> String;
}
