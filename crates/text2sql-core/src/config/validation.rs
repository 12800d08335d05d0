//! Configuration validation

use crate::config::model::Config;
use crate::database::DatabaseType;
use crate::error::{Text2SqlError, Text2SqlResult};

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration
    pub fn validate(config: &Config) -> Text2SqlResult<()> {
        Self::validate_model(config)?;
        Self::validate_database(config)?;
        config
            .logging
            .validate()
            .map_err(Text2SqlError::config)?;
        Ok(())
    }

    fn validate_model(config: &Config) -> Text2SqlResult<()> {
        let model = &config.model;

        if model.model.trim().is_empty() {
            return Err(Text2SqlError::invalid_input_field(
                "Model name cannot be empty",
                "model.model",
            ));
        }

        model
            .generation
            .validate()
            .map_err(|e| Text2SqlError::config_with_context(e, "model.generation"))?;
        model
            .timeouts
            .validate()
            .map_err(|e| Text2SqlError::config_with_context(e, "model.timeouts"))?;

        if let Some(base_url) = &model.base_url {
            let parsed = url::Url::parse(base_url).map_err(|e| {
                Text2SqlError::config_with_context(
                    format!("Invalid base URL '{}': {}", base_url, e),
                    "model.base_url",
                )
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(Text2SqlError::config(format!(
                    "Base URL must use http or https, got '{}'",
                    parsed.scheme()
                )));
            }
        }

        Ok(())
    }

    fn validate_database(config: &Config) -> Text2SqlResult<()> {
        if let Some(url) = &config.database.url {
            DatabaseType::from_url(url)?;
        }
        if config.database.connect_timeout_secs == 0 {
            return Err(Text2SqlError::config(
                "Database connect timeout must be greater than 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigValidator::validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_empty_model_rejected() {
        let mut config = Config::default();
        config.model.model = "  ".to_string();
        assert!(matches!(
            ConfigValidator::validate(&config),
            Err(Text2SqlError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_bad_base_url_rejected() {
        let mut config = Config::default();
        config.model.base_url = Some("not a url".to_string());
        assert!(ConfigValidator::validate(&config).is_err());

        config.model.base_url = Some("ftp://models.local".to_string());
        assert!(ConfigValidator::validate(&config).is_err());
    }

    #[test]
    fn test_unknown_database_scheme_rejected() {
        let mut config = Config::default();
        config.database.url = Some("mongodb://localhost".to_string());
        assert!(ConfigValidator::validate(&config).is_err());

        config.database.url = Some("postgresql://localhost/app".to_string());
        assert!(ConfigValidator::validate(&config).is_ok());
    }
}
