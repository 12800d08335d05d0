//! Model client implementation
//!
//! Wraps the configured provider with HTTP timeouts and retry with
//! exponential backoff, and exposes it as a [`Seq2SeqModel`](crate::llm::Seq2SeqModel).

mod constructor;
mod generate;
mod retry;
mod types;

pub use types::ModelClient;
