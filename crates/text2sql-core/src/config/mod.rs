//! Configuration management for text2sql

mod env_loader;
mod file_loader;
mod logging_config;

pub mod loader;
pub mod model;
pub mod timeouts;
pub mod validation;

pub use env_loader::{load_from_env, load_from_lookup};
pub use file_loader::{load_from_file, save_to_file};
pub use loader::{
    ConfigLoader, ConfigOverrides, ConfigSource, config_loader, default_config_path, load_config,
};
pub use logging_config::LoggingConfig;
pub use model::{Config, DatabaseConfig, ModelConfig, mask_api_key};
pub use validation::ConfigValidator;
