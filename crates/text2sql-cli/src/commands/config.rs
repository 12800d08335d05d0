//! Configuration management commands

use crate::commands::print_json;
use crate::console::CliConsole;
use colored::*;
use std::path::Path;
use text2sql_core::config::{Config, save_to_file};
use text2sql_core::{DatabaseType, Text2SqlError, Text2SqlResult};

/// Show the effective configuration with secrets masked
pub fn show(config: &Config, json: bool) -> Text2SqlResult<()> {
    let config = config.redacted();
    if json {
        print_json(&config);
        return Ok(());
    }

    let console = CliConsole::new(true);
    console.print_header("Configuration");
    print_config(&console, &config);
    Ok(())
}

/// Report on configuration that has already passed validation
pub fn validate(config: &Config, json: bool) -> Text2SqlResult<()> {
    let database_type = config
        .database
        .url
        .as_deref()
        .map(DatabaseType::from_url)
        .transpose()?;

    if json {
        print_json(&serde_json::json!({
            "valid": true,
            "provider": config.model.provider,
            "model": config.model.model,
            "database": database_type,
        }));
        return Ok(());
    }

    let console = CliConsole::new(true);
    console.print_header("Configuration Validation");
    console.success("Configuration is valid");
    console.info(&format!("Provider: {}", config.model.provider));
    console.info(&format!("Model: {}", config.model.model));
    match database_type {
        Some(kind) => console.info(&format!("Database: {}", kind)),
        None => console.warn("No database configured; execute and ask will fail"),
    }
    Ok(())
}

/// Initialize a new configuration file
pub async fn init(path: &Path, force: bool) -> Text2SqlResult<()> {
    let console = CliConsole::new(true);

    if path.exists() && !force {
        return Err(Text2SqlError::config_with_context(
            format!("Configuration file already exists: {}", path.display()),
            "use --force to overwrite",
        ));
    }

    save_to_file(&Config::default(), path)?;

    console.success(&format!("Created configuration file: {}", path.display()));
    console.info("Set database.url and, for hosted models, TEXT2SQL_API_KEY or HF_TOKEN");
    Ok(())
}

fn print_config(console: &CliConsole, config: &Config) {
    let not_set = || "not set".dimmed().to_string();

    console.print_field("Provider", &config.model.provider.to_string().green().to_string());
    console.print_field("Model", &config.model.model);
    console.print_field("Base URL", &config.model.effective_base_url());
    console.print_field(
        "API key",
        &config.model.api_key.clone().unwrap_or_else(not_set),
    );
    console.print_field(
        "Generation",
        &format!(
            "max_length={} num_beams={} early_stopping={}",
            config.model.generation.max_length,
            config.model.generation.num_beams,
            config.model.generation.early_stopping
        ),
    );
    console.print_field("Max retries", &config.model.max_retries.to_string());
    console.print_field(
        "Database URL",
        &config.database.url.clone().unwrap_or_else(not_set),
    );
    console.print_field("Read only", &config.database.read_only.to_string());
    console.print_field(
        "Log level",
        &format!("{} ({})", config.logging.level, config.logging.format),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use text2sql_core::config::load_from_file;

    #[tokio::test]
    async fn test_init_writes_loadable_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("text2sql.toml");

        init(&path, false).await.unwrap();
        let loaded = load_from_file(&path).unwrap();
        assert_eq!(loaded.model.model, Config::default().model.model);
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("text2sql.toml");
        std::fs::write(&path, "").unwrap();

        assert!(init(&path, false).await.is_err());
        assert!(init(&path, true).await.is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_database_url() {
        let mut config = Config::default();
        config.database.url = Some("mysql://localhost/db".to_string());
        assert!(validate(&config, true).is_err());
    }
}
