//! CLI commands

pub mod ask;
pub mod config;
pub mod execute;
pub mod translate;

use serde::Serialize;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(formatted) => println!("{formatted}"),
        Err(e) => eprintln!("Failed to serialize output: {e}"),
    }
}
