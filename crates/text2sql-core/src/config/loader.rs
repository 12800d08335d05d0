//! Layered configuration loading

use crate::config::env_loader::load_from_env;
use crate::config::file_loader::load_from_file;
use crate::config::model::Config;
use crate::config::validation::ConfigValidator;
use crate::error::Text2SqlResult;
use crate::llm::provider_types::ModelProvider;
use std::path::{Path, PathBuf};

/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "text2sql.toml";

/// Values that override whatever the earlier layers produced
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub provider: Option<ModelProvider>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub max_retries: Option<u32>,
    pub database_url: Option<String>,
    pub read_only: Option<bool>,
    pub log_level: Option<String>,
}

impl ConfigOverrides {
    /// Apply every value that is set
    pub fn apply(self, config: &mut Config) {
        if let Some(provider) = self.provider {
            config.model.provider = provider;
        }
        if let Some(model) = self.model {
            config.model.model = model;
        }
        if let Some(base_url) = self.base_url {
            config.model.base_url = Some(base_url);
        }
        if let Some(api_key) = self.api_key {
            config.model.api_key = Some(api_key);
        }
        if let Some(max_retries) = self.max_retries {
            config.model.max_retries = max_retries;
        }
        if let Some(database_url) = self.database_url {
            config.database.url = Some(database_url);
        }
        if let Some(read_only) = self.read_only {
            config.database.read_only = read_only;
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
    }
}

/// Source of configuration data
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// Built-in defaults
    Default,
    /// Configuration file; replaces everything loaded before it
    File(PathBuf),
    /// `TEXT2SQL_*` environment variables
    Environment,
    /// Explicit overrides, usually from command line flags
    Overrides(ConfigOverrides),
}

impl ConfigSource {
    /// Short label for log output
    pub fn describe(&self) -> String {
        match self {
            ConfigSource::Default => "defaults".to_string(),
            ConfigSource::File(path) if path.exists() => format!("file {}", path.display()),
            ConfigSource::File(path) => format!("file {} (not found)", path.display()),
            ConfigSource::Environment => "environment".to_string(),
            ConfigSource::Overrides(_) => "command line overrides".to_string(),
        }
    }
}

/// Configuration loader with support for multiple sources
#[derive(Debug, Default)]
pub struct ConfigLoader {
    sources: Vec<ConfigSource>,
}

impl ConfigLoader {
    /// Create a new config loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a configuration source
    pub fn add_source(mut self, source: ConfigSource) -> Self {
        self.sources.push(source);
        self
    }

    /// Add a file source
    pub fn with_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_source(ConfigSource::File(path.as_ref().to_path_buf()))
    }

    /// Add environment variables source
    pub fn with_env(self) -> Self {
        self.add_source(ConfigSource::Environment)
    }

    /// Add explicit overrides
    pub fn with_overrides(self, overrides: ConfigOverrides) -> Self {
        self.add_source(ConfigSource::Overrides(overrides))
    }

    pub fn sources(&self) -> &[ConfigSource] {
        &self.sources
    }

    /// Load configuration from all sources, in order, then validate it
    pub fn load(self) -> Text2SqlResult<Config> {
        let mut config = Config::default();

        for source in self.sources {
            match source {
                ConfigSource::Default => {
                    tracing::debug!("Loading default config");
                    config = Config::default();
                }
                ConfigSource::File(path) => {
                    tracing::debug!("Loading config from file: {}", path.display());
                    config = load_from_file(&path)?;
                }
                ConfigSource::Environment => {
                    tracing::debug!("Loading config from environment");
                    load_from_env()?.apply(&mut config);
                }
                ConfigSource::Overrides(overrides) => {
                    tracing::debug!("Applying config overrides");
                    overrides.apply(&mut config);
                }
            }
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

/// Default config file: `./text2sql.toml` if present, otherwise
/// `<config dir>/text2sql/config.toml`
pub fn default_config_path() -> PathBuf {
    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    if local.exists() {
        return local;
    }

    dirs::config_dir()
        .map(|dir| dir.join("text2sql").join("config.toml"))
        .unwrap_or(local)
}

/// Loader with the standard layers: defaults, file, environment, then the
/// given overrides
pub fn config_loader(config_file: Option<&Path>, overrides: ConfigOverrides) -> ConfigLoader {
    let path = config_file
        .map(Path::to_path_buf)
        .unwrap_or_else(default_config_path);

    ConfigLoader::new()
        .with_file(path)
        .with_env()
        .with_overrides(overrides)
}

/// Load configuration in the standard order
pub fn load_config(
    config_file: Option<&Path>,
    overrides: ConfigOverrides,
) -> Text2SqlResult<Config> {
    config_loader(config_file, overrides).load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_overrides_apply_only_set_fields() {
        let mut config = Config::default();
        config.database.url = Some("sqlite://keep.db".to_string());

        ConfigOverrides {
            model: Some("cssupport/t5-small-awesome-text-to-sql".to_string()),
            ..Default::default()
        }
        .apply(&mut config);

        assert_eq!(config.model.model, "cssupport/t5-small-awesome-text-to-sql");
        assert_eq!(config.database.url.as_deref(), Some("sqlite://keep.db"));
    }

    #[test]
    fn test_later_layers_win() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("text2sql.toml");
        fs::write(
            &config_path,
            "[database]\nurl = \"sqlite://from-file.db\"\nread_only = true\n",
        )
        .unwrap();

        let config = ConfigLoader::new()
            .with_file(&config_path)
            .with_overrides(ConfigOverrides {
                database_url: Some("sqlite://from-flag.db".to_string()),
                ..Default::default()
            })
            .load()
            .unwrap();

        assert_eq!(config.database.url.as_deref(), Some("sqlite://from-flag.db"));
        assert!(config.database.read_only);
    }

    #[test]
    fn test_standard_layers_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let present = temp_dir.path().join("text2sql.toml");
        fs::write(&present, "").unwrap();

        let loader = config_loader(Some(&present), ConfigOverrides::default());
        let layers: Vec<String> = loader.sources().iter().map(ConfigSource::describe).collect();
        assert_eq!(
            layers,
            vec![
                format!("file {}", present.display()),
                "environment".to_string(),
                "command line overrides".to_string(),
            ]
        );

        let missing = temp_dir.path().join("missing.toml");
        let loader = config_loader(Some(&missing), ConfigOverrides::default());
        assert!(loader.sources()[0].describe().ends_with("(not found)"));
        assert_eq!(ConfigSource::Default.describe(), "defaults");
    }

    #[test]
    fn test_invalid_result_fails_validation() {
        let result = ConfigLoader::new()
            .add_source(ConfigSource::Default)
            .with_overrides(ConfigOverrides {
                database_url: Some("mysql://localhost/app".to_string()),
                ..Default::default()
            })
            .load();
        assert!(result.is_err());
    }
}
