//! Question to SQL translation

use crate::error::{Text2SqlError, Text2SqlResult};
use crate::llm::{GenerationParams, Seq2SeqModel};
use crate::translate::postprocess::clean_generated_text;
use crate::translate::prompt::build_prompt;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Translates English questions into SQL with a sequence-to-sequence model
#[derive(Clone)]
pub struct Translator {
    model: Arc<dyn Seq2SeqModel>,
    params: GenerationParams,
}

impl Translator {
    /// Create a translator with the default decoding parameters
    /// (max length 128, 4 beams, early stopping)
    pub fn new(model: Arc<dyn Seq2SeqModel>) -> Self {
        Self {
            model,
            params: GenerationParams::default(),
        }
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    pub fn model_name(&self) -> String {
        self.model.model_name()
    }

    /// Translate `question` into SQL.
    ///
    /// The first output sequence is returned as-is after special tokens are
    /// stripped. An empty string is a valid result.
    #[instrument(skip(self, question), level = "debug")]
    pub async fn translate(&self, question: &str) -> Text2SqlResult<String> {
        info!("Translating question with {}", self.model.model_name());

        let prompt = build_prompt(question);
        debug!("Prompt: {}", prompt);

        let outputs = self.model.generate(&prompt, &self.params).await?;
        let first = outputs.into_iter().next().ok_or_else(|| Text2SqlError::Model {
            message: "Model returned no output sequences".to_string(),
            model: Some(self.model.model_name()),
            status_code: None,
        })?;

        let sql = clean_generated_text(&first);
        debug!("Generated SQL: {}", sql);
        Ok(sql)
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("model", &self.model.model_name())
            .field("params", &self.params)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::model::MockSeq2SeqModel;
    use crate::translate::PROMPT_PREFIX;

    fn mock_model() -> MockSeq2SeqModel {
        let mut model = MockSeq2SeqModel::new();
        model
            .expect_model_name()
            .returning(|| "test-model".to_string());
        model
    }

    #[tokio::test]
    async fn test_prompt_and_params_reach_the_model() {
        let mut model = mock_model();
        model
            .expect_generate()
            .withf(|input, params| {
                input == "translate English to SQL: give me one"
                    && params.max_length == 128
                    && params.num_beams == 4
                    && params.early_stopping
            })
            .times(1)
            .returning(|_, _| Ok(vec!["SELECT 1".to_string()]));

        let translator = Translator::new(Arc::new(model));
        assert_eq!(translator.translate("give me one").await.unwrap(), "SELECT 1");
    }

    #[tokio::test]
    async fn test_every_input_is_prefixed() {
        let mut model = mock_model();
        model
            .expect_generate()
            .withf(|input, _| input.starts_with(PROMPT_PREFIX))
            .times(3)
            .returning(|_, _| Ok(vec![String::new()]));

        let translator = Translator::new(Arc::new(model));
        for question in ["", "list users", "translate English to SQL: nested"] {
            translator.translate(question).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_first_candidate_wins() {
        let mut model = mock_model();
        model.expect_generate().returning(|_, _| {
            Ok(vec![
                "SELECT name FROM users</s>".to_string(),
                "SELECT * FROM users".to_string(),
            ])
        });

        let translator = Translator::new(Arc::new(model));
        assert_eq!(
            translator.translate("names").await.unwrap(),
            "SELECT name FROM users"
        );
    }

    #[tokio::test]
    async fn test_empty_output_is_returned() {
        let mut model = mock_model();
        model
            .expect_generate()
            .returning(|_, _| Ok(vec![String::new()]));

        let translator = Translator::new(Arc::new(model));
        assert_eq!(translator.translate("???").await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_no_sequences_is_model_error() {
        let mut model = mock_model();
        model.expect_generate().returning(|_, _| Ok(Vec::new()));

        let translator = Translator::new(Arc::new(model));
        let err = translator.translate("anything").await.unwrap_err();
        assert!(matches!(err, Text2SqlError::Model { .. }));
    }

    #[tokio::test]
    async fn test_generation_failure_is_propagated() {
        let mut model = mock_model();
        model
            .expect_generate()
            .returning(|_, _| Err(Text2SqlError::model("CUDA out of memory")));

        let translator = Translator::new(Arc::new(model));
        let err = translator.translate("anything").await.unwrap_err();
        assert!(err.to_string().contains("CUDA out of memory"));
    }

    #[tokio::test]
    async fn test_custom_params() {
        let mut model = mock_model();
        model
            .expect_generate()
            .withf(|_, params| params.num_beams == 1)
            .returning(|_, _| Ok(vec!["SELECT 2".to_string()]));

        let params = GenerationParams {
            num_beams: 1,
            ..Default::default()
        };
        let translator = Translator::new(Arc::new(model)).with_params(params);
        assert_eq!(translator.params().num_beams, 1);
        assert_eq!(translator.translate("two").await.unwrap(), "SELECT 2");
    }
}
