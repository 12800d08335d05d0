//! Text-to-SQL model access
//!
//! The model itself runs elsewhere (Hugging Face inference, a local Ollama
//! server); this module formats requests for it, talks HTTP, and turns the
//! replies into decoded output sequences.

pub mod client;
pub mod model;
pub mod provider_types;
pub mod providers;

pub use client::ModelClient;
pub use model::Seq2SeqModel;
pub use provider_types::{DEFAULT_MODEL, GenerationParams, ModelProvider, TimeoutConfig};
