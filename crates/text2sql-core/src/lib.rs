//! Text2SQL Core Library
//!
//! Turns English questions into SQL with a pretrained sequence-to-sequence
//! model (T5 fine-tuned for text-to-SQL by default) and runs SQL against
//! PostgreSQL or SQLite.
//!
//! ```no_run
//! use text2sql_core::{Config, TextToSql};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut config = Config::default();
//! config.database.url = Some("sqlite://shop.db".to_string());
//!
//! let t2s = TextToSql::from_config(&config)?;
//! let sql = t2s.translate("How many orders were placed in May?").await?;
//! let result = t2s.execute(&sql).await?;
//! println!("{} rows", result.row_count());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod llm;
pub mod text_to_sql;
pub mod translate;

// Re-export commonly used types
pub use config::{Config, DatabaseConfig, LoggingConfig, ModelConfig};
pub use database::{Database, DatabaseType, QueryResult, Row, SqlDatabase, format_result};
pub use error::{ErrorRecord, Text2SqlError, Text2SqlResult, into_record};
pub use llm::{DEFAULT_MODEL, GenerationParams, ModelClient, ModelProvider, Seq2SeqModel};
pub use text_to_sql::{AskOutcome, TextToSql};
pub use translate::{PROMPT_PREFIX, Translator, build_prompt};
