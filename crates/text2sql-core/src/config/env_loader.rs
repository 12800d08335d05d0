//! Environment variable-based configuration loading

use crate::config::loader::ConfigOverrides;
use crate::error::{Text2SqlError, Text2SqlResult};
use std::env;

/// Load configuration overrides from the process environment
///
/// `TEXT2SQL_*` variables take precedence; `HF_TOKEN` and `DATABASE_URL`
/// are honoured as fallbacks.
pub fn load_from_env() -> Text2SqlResult<ConfigOverrides> {
    load_from_lookup(|key| env::var(key).ok())
}

/// Load configuration overrides through an arbitrary variable lookup
pub fn load_from_lookup<F>(lookup: F) -> Text2SqlResult<ConfigOverrides>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    let mut overrides = ConfigOverrides::default();

    if let Some(provider) = get("TEXT2SQL_PROVIDER") {
        overrides.provider = Some(provider.parse().map_err(|e: String| {
            Text2SqlError::config_with_context(e, "Parsing TEXT2SQL_PROVIDER")
        })?);
    }

    overrides.model = get("TEXT2SQL_MODEL");
    overrides.base_url = get("TEXT2SQL_BASE_URL");
    overrides.api_key = get("TEXT2SQL_API_KEY").or_else(|| get("HF_TOKEN"));

    if let Some(retries) = get("TEXT2SQL_MAX_RETRIES") {
        overrides.max_retries = Some(retries.trim().parse().map_err(|_| {
            Text2SqlError::config_with_context(
                "Invalid TEXT2SQL_MAX_RETRIES value",
                format!("Parsing retry count '{}'", retries),
            )
        })?);
    }

    overrides.database_url = get("TEXT2SQL_DATABASE_URL").or_else(|| get("DATABASE_URL"));

    if let Some(read_only) = get("TEXT2SQL_READ_ONLY") {
        overrides.read_only = Some(parse_bool(&read_only).ok_or_else(|| {
            Text2SqlError::config_with_context(
                "Invalid TEXT2SQL_READ_ONLY value",
                format!("Expected true/false, got '{}'", read_only),
            )
        })?);
    }

    overrides.log_level = get("TEXT2SQL_LOG_LEVEL");

    Ok(overrides)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
