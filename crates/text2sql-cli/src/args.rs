//! CLI argument definitions using clap
//!
//! - text2sql translate "question"   # Print the generated SQL
//! - text2sql execute "SQL"          # Run SQL and print the rows
//! - text2sql ask "question"         # Translate, then run the SQL
//! - text2sql config show|validate|init

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use text2sql_core::ModelProvider;

#[derive(Parser, Debug)]
#[command(name = "text2sql")]
#[command(about = "Translate English questions to SQL and run them")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (TOML, YAML or JSON)
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Model provider: huggingface or ollama
    #[arg(long, global = true)]
    pub provider: Option<ModelProvider>,

    /// Model identifier
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Base URL of the inference service
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Database connection URI (postgresql://..., sqlite://... or a .db path)
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    /// Reject statements that are not plain queries
    #[arg(long, global = true)]
    pub read_only: bool,

    /// Print a single JSON document instead of formatted output
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate an English question into SQL
    Translate {
        /// The question, passed to the model unmodified
        question: String,
    },

    /// Execute SQL verbatim and print the rows
    Execute {
        /// SQL statement to run
        sql: String,
    },

    /// Translate a question and execute the generated SQL
    Ask {
        /// The question, passed to the model unmodified
        question: String,
    },

    /// Manage configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Display the effective configuration with secrets masked
    Show,

    /// Validate configuration without contacting any service
    Validate,

    /// Create a new configuration file with defaults
    Init {
        /// Path for the new configuration file
        #[arg(long, default_value = text2sql_core::config::loader::DEFAULT_CONFIG_FILE)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
