//! text2sql command-line interface
//!
//! Translate English questions to SQL with a pretrained text-to-SQL model
//! and run SQL against PostgreSQL or SQLite.
//!
//! ```bash
//! text2sql translate "How many users signed up in March?"
//! text2sql --database-url sqlite://shop.db execute "SELECT COUNT(*) FROM users"
//! text2sql --database-url sqlite://shop.db ask "How many users are there?"
//! text2sql config init
//! ```
//!
//! With `--json` every command prints a single JSON document: the result on
//! success, `{"error": "..."}` on failure. The exit status is non-zero
//! whenever the command failed.

mod args;
mod commands;
mod console;
mod logging;
mod router;

use args::Cli;
use clap::Parser;
use console::CliConsole;
use std::process::ExitCode;
use text2sql_core::{ErrorRecord, Text2SqlError};

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let json = cli.json;

    match router::route(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e, json);
            ExitCode::FAILURE
        }
    }
}

fn report_error(error: &anyhow::Error, json: bool) {
    let record = error
        .downcast_ref::<Text2SqlError>()
        .map(ErrorRecord::from)
        .unwrap_or_else(|| ErrorRecord::new(format!("{:#}", error)));

    if json {
        commands::print_json(&record);
    } else {
        CliConsole::new(false).error(&record.error);
    }
}
