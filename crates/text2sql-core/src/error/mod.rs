//! Error types for text2sql
//!
//! Every fallible operation in the library returns [`Text2SqlResult`]. The
//! error enum keeps failure kinds apart (configuration, model, connection,
//! query, decoding, ...) so callers can branch on them, while
//! [`ErrorRecord`] offers the flat `{"error": "<message>"}` shape for callers
//! that only want to report the failure.

mod classifiers;
mod constructors;
mod conversions;
mod record;
mod types;

pub use record::{ErrorRecord, into_record};
pub use types::{Text2SqlError, Text2SqlResult};
