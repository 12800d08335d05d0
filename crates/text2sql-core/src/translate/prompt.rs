//! Prompt construction

/// Task prefix the model was fine-tuned with
pub const PROMPT_PREFIX: &str = "translate English to SQL: ";

/// Prefix `question` with the task instruction; the question is not altered
pub fn build_prompt(question: &str) -> String {
    format!("{}{}", PROMPT_PREFIX, question)
}
