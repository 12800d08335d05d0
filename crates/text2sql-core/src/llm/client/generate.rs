//! Generation entry point

use super::types::ModelClient;
use crate::error::Text2SqlResult;
use crate::llm::model::Seq2SeqModel;
use crate::llm::provider_types::GenerationParams;
use async_trait::async_trait;

#[async_trait]
impl Seq2SeqModel for ModelClient {
    async fn generate(
        &self,
        input: &str,
        params: &GenerationParams,
    ) -> Text2SqlResult<Vec<String>> {
        self.execute_with_retry(|| self.provider_instance.generate(input, params))
            .await
    }

    fn model_name(&self) -> String {
        self.config.model.clone()
    }
}
