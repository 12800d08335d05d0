//! From trait implementations for Text2SqlError conversions

use super::types::Text2SqlError;

impl From<std::io::Error> for Text2SqlError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for Text2SqlError {
    fn from(error: serde_json::Error) -> Self {
        Self::json(error.to_string())
    }
}

impl From<reqwest::Error> for Text2SqlError {
    fn from(error: reqwest::Error) -> Self {
        let status_code = error.status().map(|s| s.as_u16());
        let url = error.url().map(|u| u.to_string());
        Self::Http {
            message: error.to_string(),
            url,
            status_code,
        }
    }
}

impl From<sqlx::Error> for Text2SqlError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::Configuration(e) => Self::config(e.to_string()),
            sqlx::Error::Io(e) => Self::connection(e.to_string()),
            sqlx::Error::Tls(e) => Self::connection(e.to_string()),
            sqlx::Error::ColumnDecode { index, source } => {
                Self::decode(index, "unknown", source.to_string())
            }
            other => Self::query(other.to_string()),
        }
    }
}
