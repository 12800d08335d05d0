//! The flat `{"error": "<message>"}` shape

use super::types::{Text2SqlError, Text2SqlResult};
use serde::{Deserialize, Serialize};

/// Uniform error record returned to callers that do not care about the
/// failure kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub error: String,
}

impl ErrorRecord {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl From<&Text2SqlError> for ErrorRecord {
    fn from(error: &Text2SqlError) -> Self {
        Self::new(error.message())
    }
}

impl From<Text2SqlError> for ErrorRecord {
    fn from(error: Text2SqlError) -> Self {
        Self::from(&error)
    }
}

impl std::fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.error)
    }
}

/// Collapse an operation result into either its value or an [`ErrorRecord`].
pub fn into_record<T>(result: Text2SqlResult<T>) -> Result<T, ErrorRecord> {
    result.map_err(ErrorRecord::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_to_single_error_key() {
        let record = ErrorRecord::from(Text2SqlError::connection("connection refused"));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "connection refused" }));
    }

    #[test]
    fn test_into_record_passes_values_through() {
        let ok: Text2SqlResult<u32> = Ok(7);
        assert_eq!(into_record(ok), Ok(7));

        let err: Text2SqlResult<u32> = Err(Text2SqlError::model("CUDA out of memory"));
        let record = into_record(err).unwrap_err();
        assert!(record.error.contains("CUDA out of memory"));
    }
}
