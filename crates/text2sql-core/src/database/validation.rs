//! Connection string validation and redaction

use crate::database::types::DatabaseType;
use crate::error::{Text2SqlError, Text2SqlResult};

const SQLITE_FILE_EXTENSIONS: [&str; 4] = [".db", ".sqlite", ".sqlite3", ".db3"];

impl DatabaseType {
    /// Determine the database type from a connection URI
    pub fn from_url(url: &str) -> Text2SqlResult<Self> {
        normalize_url(url).map(|(database_type, _)| database_type)
    }
}

/// Classify a connection string and bring it into the form the driver expects.
///
/// `:memory:` and bare SQLite file paths are rewritten to `sqlite:` URLs;
/// PostgreSQL and `sqlite:` URLs pass through unchanged.
pub fn normalize_url(url: &str) -> Text2SqlResult<(DatabaseType, String)> {
    let url = url.trim();

    if url.starts_with("postgresql://") || url.starts_with("postgres://") {
        return Ok((DatabaseType::PostgreSql, url.to_string()));
    }

    if url.starts_with("sqlite:") {
        return Ok((DatabaseType::Sqlite, url.to_string()));
    }

    if url == ":memory:" {
        return Ok((DatabaseType::Sqlite, "sqlite::memory:".to_string()));
    }

    if !url.contains("://")
        && SQLITE_FILE_EXTENSIONS
            .iter()
            .any(|ext| url.to_lowercase().ends_with(ext))
    {
        return Ok((DatabaseType::Sqlite, format!("sqlite://{}", url)));
    }

    Err(Text2SqlError::config(format!(
        "Unsupported database URL '{}': expected postgres://, postgresql://, sqlite: or a SQLite file path",
        redact_url(url)
    )))
}

/// Replace the password in a connection URI so it can be logged
pub fn redact_url(url: &str) -> String {
    match url::Url::parse(url) {
        Ok(mut parsed) if parsed.password().is_some() => {
            if parsed.set_password(Some("****")).is_ok() {
                parsed.to_string()
            } else {
                url.to_string()
            }
        }
        _ => url.to_string(),
    }
}
