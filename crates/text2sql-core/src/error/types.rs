//! Core error type

use thiserror::Error;

/// Result type alias for text2sql operations
pub type Text2SqlResult<T> = Result<T, Text2SqlError>;

/// Main error type for text2sql
#[derive(Error, Debug, Clone)]
pub enum Text2SqlError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// The model provider rejected the request or returned unusable output
    #[error("Model error: {message}")]
    Model {
        message: String,
        model: Option<String>,
        status_code: Option<u16>,
    },

    /// Transport-level HTTP failures (DNS, TLS, connection reset, ...)
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        url: Option<String>,
        status_code: Option<u16>,
    },

    /// Could not open a database connection
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        target: Option<String>,
    },

    /// The database rejected or failed the statement
    #[error("Query error: {message}")]
    Query { message: String, sql: Option<String> },

    /// A result column could not be converted to a JSON value
    #[error("Decode error: column '{column}' ({type_name}): {message}")]
    Decode {
        column: String,
        type_name: String,
        message: String,
    },

    /// Operation exceeded its time limit
    #[error("{operation} timed out after {seconds} seconds")]
    Timeout { operation: String, seconds: u64 },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json { message: String },

    /// Invalid input errors
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        field: Option<String>,
    },
}
