//! File-based configuration loading

use crate::config::model::Config;
use crate::error::{Text2SqlError, Text2SqlResult};
use std::fs;
use std::path::Path;

/// Load configuration from a file
///
/// Supports JSON, TOML, and YAML formats based on file extension.
/// Returns default config if file doesn't exist.
pub fn load_from_file(path: &Path) -> Text2SqlResult<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        Text2SqlError::config_with_context(
            format!("Failed to read config file: {}", e),
            format!("Reading configuration from '{}'", path.display()),
        )
    })?;

    let config: Config = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|e| {
            Text2SqlError::config_with_context(
                format!("Failed to parse TOML config: {}", e),
                format!("Deserializing TOML configuration from '{}'", path.display()),
            )
        })?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| {
            Text2SqlError::config_with_context(
                format!("Failed to parse YAML config: {}", e),
                format!("Deserializing YAML configuration from '{}'", path.display()),
            )
        })?,
        _ => serde_json::from_str(&content).map_err(|e| {
            Text2SqlError::config_with_context(
                format!("Failed to parse JSON config: {}", e),
                format!("Deserializing JSON configuration from '{}'", path.display()),
            )
        })?,
    };

    Ok(config)
}

/// Write configuration to a file, picking the format from the extension
pub fn save_to_file(config: &Config, path: &Path) -> Text2SqlResult<()> {
    let content = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::to_string_pretty(config)
            .map_err(|e| Text2SqlError::config(format!("Failed to serialize TOML: {}", e)))?,
        Some("yaml") | Some("yml") => serde_yaml::to_string(config)
            .map_err(|e| Text2SqlError::config(format!("Failed to serialize YAML: {}", e)))?,
        _ => serde_json::to_string_pretty(config)?,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| Text2SqlError::io_with_path(e.to_string(), parent.display().to_string()))?;
    }

    fs::write(path, content)
        .map_err(|e| Text2SqlError::io_with_path(e.to_string(), path.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::provider_types::ModelProvider;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_from_file(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.model.model, "suriya7/t5-base-text-to-sql");
    }

    #[test]
    fn test_load_from_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("text2sql.toml");
        fs::write(
            &config_path,
            r#"
[model]
provider = "ollama"
model = "sqlcoder"
max_retries = 2

[model.generation]
max_length = 256

[database]
url = "sqlite://shop.db"
read_only = true
"#,
        )
        .unwrap();

        let config = load_from_file(&config_path).unwrap();
        assert_eq!(config.model.provider, ModelProvider::Ollama);
        assert_eq!(config.model.model, "sqlcoder");
        assert_eq!(config.model.max_retries, 2);
        assert_eq!(config.model.generation.max_length, 256);
        assert_eq!(config.model.generation.num_beams, 4);
        assert_eq!(config.database.url.as_deref(), Some("sqlite://shop.db"));
        assert!(config.database.read_only);
    }

    #[test]
    fn test_load_from_yaml_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("text2sql.yaml");
        fs::write(
            &config_path,
            "database:\n  url: postgres://localhost/app\nlogging:\n  level: debug\n",
        )
        .unwrap();

        let config = load_from_file(&config_path).unwrap();
        assert_eq!(
            config.database.url.as_deref(),
            Some("postgres://localhost/app")
        );
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("text2sql.json");
        fs::write(&config_path, "{ not json").unwrap();

        let err = load_from_file(&config_path).unwrap_err();
        assert!(matches!(err, Text2SqlError::Config { .. }));
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.database.url = Some("sqlite::memory:".to_string());
        save_to_file(&config, &config_path).unwrap();

        let loaded = load_from_file(&config_path).unwrap();
        assert_eq!(loaded.database.url.as_deref(), Some("sqlite::memory:"));
    }
}
