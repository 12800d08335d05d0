//! English question to SQL translation
//!
//! A [`Translator`] formats the question into the model's prompt, runs the
//! generation routine with fixed decoding parameters and returns the best
//! output sequence as SQL. Neither the question nor the SQL is validated.

mod postprocess;
mod prompt;
mod translator;

pub use postprocess::clean_generated_text;
pub use prompt::{PROMPT_PREFIX, build_prompt};
pub use translator::Translator;
