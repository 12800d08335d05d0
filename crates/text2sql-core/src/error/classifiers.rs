//! Error classification helpers

use super::types::Text2SqlError;

impl Text2SqlError {
    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "CONFIG_ERROR",
            Self::Model { .. } => "MODEL_ERROR",
            Self::Http { .. } => "HTTP_ERROR",
            Self::Connection { .. } => "CONNECTION_ERROR",
            Self::Query { .. } => "QUERY_ERROR",
            Self::Decode { .. } => "DECODE_ERROR",
            Self::Timeout { .. } => "TIMEOUT",
            Self::Io { .. } => "IO_ERROR",
            Self::Json { .. } => "JSON_ERROR",
            Self::InvalidInput { .. } => "INVALID_INPUT",
        }
    }

    /// Whether retrying the same request may succeed.
    ///
    /// Rate limits (429), server-side failures (5xx, including the 503 a
    /// hosted model answers with while it is still loading), timeouts and
    /// transport errors are retryable. Everything else is not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Model {
                status_code: Some(code),
                ..
            }
            | Self::Http {
                status_code: Some(code),
                ..
            } => *code == 429 || (500..600).contains(code),
            Self::Http {
                status_code: None, ..
            } => true,
            Self::Timeout { .. } => true,
            _ => false,
        }
    }

    /// Human-readable message without the variant prefix
    pub fn message(&self) -> String {
        match self {
            Self::Config { message, .. }
            | Self::Model { message, .. }
            | Self::Http { message, .. }
            | Self::Connection { message, .. }
            | Self::Query { message, .. }
            | Self::Io { message, .. }
            | Self::Json { message }
            | Self::InvalidInput { message, .. } => message.clone(),
            Self::Decode { .. } | Self::Timeout { .. } => self.to_string(),
        }
    }
}
