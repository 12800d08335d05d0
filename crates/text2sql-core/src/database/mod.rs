//! SQL execution against PostgreSQL and SQLite
//!
//! Statements run verbatim on a fresh connection per call: connect, fetch
//! every row, close. Rows come back as JSON values so callers do not need
//! to know the driver's types.

mod decode;
mod executor;
mod formatting;
mod guard;
mod types;
mod validation;

pub use executor::{Database, SqlDatabase};
pub use formatting::format_result;
pub use guard::ensure_read_only;
pub use types::{DatabaseType, QueryResult, Row};
pub use validation::{normalize_url, redact_url};

#[cfg(test)]
pub use executor::MockDatabase;
