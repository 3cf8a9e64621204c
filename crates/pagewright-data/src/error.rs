//! Error types for record loading and building.

use thiserror::Error;

/// Result type for data operations
pub type Result<T> = std::result::Result<T, RecordError>;

/// Errors that can occur while loading or canonicalizing raw input
#[derive(Debug, Error)]
pub enum RecordError {
    /// One or more required fields are absent, null or blank
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// A field is present but cannot be read as its required type
    #[error("Cannot read field '{field}' as {expected}: got {value}")]
    TypeCoercion {
        field: String,
        value: String,
        expected: &'static str,
    },

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Top-level input is not a key-value object
    #[error("Expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RecordError {
    /// Build a coercion error for `field`
    pub fn coercion(field: &str, value: &serde_json::Value, expected: &'static str) -> Self {
        Self::TypeCoercion {
            field: field.to_string(),
            value: value.to_string(),
            expected,
        }
    }

    /// The missing field names, if this is a missing-field error
    pub fn missing_fields(&self) -> Option<&[String]> {
        match self {
            RecordError::MissingFields(fields) => Some(fields),
            _ => None,
        }
    }

    /// Whether the error comes from the input contents rather than I/O
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RecordError::MissingFields(_) | RecordError::TypeCoercion { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message_lists_all() {
        let err = RecordError::MissingFields(vec!["benefits".to_string(), "price_in_inr".to_string()]);
        assert_eq!(
            err.to_string(),
            "Missing required fields: benefits, price_in_inr"
        );
        assert_eq!(err.missing_fields().map(|f| f.len()), Some(2));
        assert!(err.is_validation());
    }

    #[test]
    fn test_coercion_message() {
        let err = RecordError::coercion(
            "price_in_inr",
            &serde_json::Value::from("cheap"),
            "a non-negative integer",
        );
        assert_eq!(
            err.to_string(),
            "Cannot read field 'price_in_inr' as a non-negative integer: got \"cheap\""
        );
        assert!(err.missing_fields().is_none());
    }
}
