//! Command routing logic for CLI

use crate::args::{Cli, Commands, ConfigAction};
use crate::commands;
use crate::logging;
use anyhow::Result;
use text2sql_core::{Config, TextToSql};
use text2sql_core::config::{ConfigLoader, ConfigOverrides, ConfigSource, config_loader};

/// Flags that override file and environment configuration
fn overrides_from(cli: &Cli) -> ConfigOverrides {
    ConfigOverrides {
        provider: cli.provider,
        model: cli.model.clone(),
        base_url: cli.base_url.clone(),
        database_url: cli.database_url.clone(),
        read_only: cli.read_only.then_some(true),
        log_level: cli.verbose.then(|| "debug".to_string()),
        ..Default::default()
    }
}

fn loader_for(cli: &Cli) -> ConfigLoader {
    config_loader(cli.config_file.as_deref(), overrides_from(cli))
}

/// Layer labels in the order they are applied
fn config_layers(loader: &ConfigLoader) -> Vec<String> {
    loader.sources().iter().map(ConfigSource::describe).collect()
}

/// Load layered configuration and start logging.
///
/// The log level comes from the loaded configuration, so the layers are
/// reported once the subscriber is up.
fn prepare(cli: &Cli) -> Result<Config> {
    let loader = loader_for(cli);
    let layers = config_layers(&loader);
    let config = loader.load()?;
    logging::init(&config.logging)?;
    tracing::debug!("Configuration layers: {}", layers.join(" -> "));
    tracing::debug!("Configuration loaded (provider: {})", config.model.provider);
    Ok(config)
}

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli) -> Result<()> {
    match &cli.command {
        // Writing a fresh file must not depend on the current one being valid
        Commands::Config {
            action: ConfigAction::Init { path, force },
        } => Ok(commands::config::init(path, *force).await?),
        Commands::Config {
            action: ConfigAction::Show,
        } => Ok(commands::config::show(&prepare(&cli)?, cli.json)?),
        Commands::Config {
            action: ConfigAction::Validate,
        } => Ok(commands::config::validate(&prepare(&cli)?, cli.json)?),
        Commands::Translate { question } => {
            let t2s = TextToSql::from_config(&prepare(&cli)?)?;
            Ok(commands::translate::run(&t2s, question, cli.json).await?)
        }
        Commands::Execute { sql } => {
            let t2s = TextToSql::from_config(&prepare(&cli)?)?;
            Ok(commands::execute::run(&t2s, sql, cli.json).await?)
        }
        Commands::Ask { question } => {
            let t2s = TextToSql::from_config(&prepare(&cli)?)?;
            Ok(commands::ask::run(&t2s, question, cli.json, cli.verbose).await?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_overrides_only_carry_given_flags() {
        let cli = Cli::try_parse_from(["text2sql", "translate", "q"]).unwrap();
        let overrides = overrides_from(&cli);
        assert!(overrides.model.is_none());
        assert!(overrides.read_only.is_none());
        assert!(overrides.log_level.is_none());
    }

    #[test]
    fn test_overrides_from_flags() {
        let cli = Cli::try_parse_from([
            "text2sql",
            "--model",
            "cssupport/t5-small-awesome-text-to-sql",
            "--read-only",
            "-v",
            "ask",
            "q",
        ])
        .unwrap();
        let overrides = overrides_from(&cli);
        assert_eq!(
            overrides.model.as_deref(),
            Some("cssupport/t5-small-awesome-text-to-sql")
        );
        assert_eq!(overrides.read_only, Some(true));
        assert_eq!(overrides.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_config_layers_follow_flags() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("custom.toml");
        std::fs::write(&config_path, "").unwrap();

        let cli = Cli::try_parse_from([
            "text2sql",
            "--config-file",
            config_path.to_str().unwrap(),
            "translate",
            "q",
        ])
        .unwrap();
        let loader = loader_for(&cli);

        assert_eq!(
            config_layers(&loader),
            vec![
                format!("file {}", config_path.display()),
                "environment".to_string(),
                "command line overrides".to_string(),
            ]
        );
    }
}
