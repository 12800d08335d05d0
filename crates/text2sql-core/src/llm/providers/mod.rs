//! Provider-specific implementations

pub mod error_utils;
pub mod huggingface;
pub mod ollama;
pub mod provider_trait;

pub use huggingface::HuggingFaceProvider;
pub use ollama::OllamaProvider;
pub use provider_trait::ProviderInstance;
