//! CLI console utilities

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// CLI console for formatted output
pub struct CliConsole {
    verbose: bool,
    progress_bar: Option<ProgressBar>,
}

impl CliConsole {
    /// Create a new CLI console
    pub const fn new(verbose: bool) -> Self {
        Self {
            verbose,
            progress_bar: None,
        }
    }

    /// Print an info message (verbose only)
    pub fn info(&self, message: &str) {
        if self.verbose {
            println!("{} {}", "ℹ".blue().bold(), message);
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("{} {}", "✓".green().bold(), message.green());
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        println!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    /// Print a header
    pub fn print_header(&self, title: &str) {
        println!();
        println!("{}", title.bold().underline());
        println!("{}", "=".repeat(title.len()).dimmed());
    }

    /// Print a labelled value
    pub fn print_field(&self, label: &str, value: &str) {
        println!("  {:<22} {}", format!("{}:", label).dimmed(), value);
    }

    /// Print generated SQL
    pub fn print_sql(&self, sql: &str) {
        if sql.is_empty() {
            self.warn("The model produced no SQL");
        } else {
            println!("{}", sql.cyan());
        }
    }

    /// Start a spinner on stderr; hidden when stderr is not a terminal
    pub fn start_progress(&mut self, message: &str) {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.blue} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        self.progress_bar = Some(pb);
    }

    /// Clear the spinner
    pub fn finish_progress(&mut self) {
        if let Some(pb) = self.progress_bar.take() {
            pb.finish_and_clear();
        }
    }
}
