//! Error types for the modality library.

use std::io;
use thiserror::Error;

/// Result type alias for modality operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while importing or exporting documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The uploaded bytes are not valid UTF-8 text.
    #[error("Invalid UTF-8 input: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The uploaded text is not valid JSON.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level JSON value is not an array of records.
    #[error("Expected a JSON array of records, found {found}")]
    NotAnArray {
        /// Kind of JSON value that was found instead
        found: &'static str,
    },

    /// An element of the record array is not a JSON object.
    #[error("Record {index} is not a JSON object (found {found})")]
    InvalidRecord {
        /// Zero-based position of the offending element
        index: usize,
        /// Kind of JSON value that was found instead
        found: &'static str,
    },

    /// Error during rendering (JSON, Markdown).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether this error means the uploaded content could not be read as a
    /// document at all.
    pub fn is_import_error(&self) -> bool {
        matches!(
            self,
            Error::Utf8(_) | Error::Json(_) | Error::NotAnArray { .. } | Error::InvalidRecord { .. }
        )
    }
}

/// Name of a JSON value's kind, for error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_display() {
        let err = Error::NotAnArray { found: "an object" };
        assert_eq!(
            err.to_string(),
            "Expected a JSON array of records, found an object"
        );

        let err = Error::InvalidRecord {
            index: 3,
            found: "a string",
        };
        assert_eq!(
            err.to_string(),
            "Record 3 is not a JSON object (found a string)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_import_error());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.is_import_error());
        assert!(err.to_string().starts_with("Invalid JSON"));
    }

    #[test]
    fn test_json_kind() {
        assert_eq!(json_kind(&json!(null)), "null");
        assert_eq!(json_kind(&json!([1])), "an array");
        assert_eq!(json_kind(&json!({"a": 1})), "an object");
    }
}
