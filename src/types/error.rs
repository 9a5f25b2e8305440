//! Error types for the ledger and support-desk cores
//!
//! The boundary taxonomy, in the order an HTTP layer would map it:
//!
//! - **Validation** - a well-typed value violates a domain rule (400)
//! - **NotFound** - a referenced identifier is absent (404)
//! - **UnsupportedFile** - an upload filename fails the extension gate (400)
//! - **Io** / **Internal** - file boundary and unanticipated failures (500)
//!
//! Structural/type errors in request bodies are rejected upstream by the
//! deserialization step and never reach these types. Import-row failures
//! are not errors either; they aggregate into
//! [`ImportResult`](crate::types::ImportResult).

use serde::Serialize;
use thiserror::Error;

/// A single field-level validation failure
///
/// Displays as `{field}: {message}`, the exact string import results
/// carry per row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// Wire name of the offending field
    pub field: String,
    /// Human-readable rule violation
    pub message: String,
}

impl FieldError {
    /// Create a field error from anything string-like
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(FieldError::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Main error type for both service cores
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeskError {
    /// One or more domain rules failed on an otherwise well-typed record
    ///
    /// Carries the full collected report, never just the first failure.
    #[error("Validation failed: {}", join_field_errors(errors))]
    Validation {
        /// Every field failure, in validator order
        errors: Vec<FieldError>,
    },

    /// A referenced identifier does not exist in its store
    #[error("{entity} with ID '{id}' not found")]
    NotFound {
        /// Record family, e.g. "Transaction" or "Ticket"
        entity: String,
        /// The identifier that missed
        id: String,
    },

    /// An upload was rejected before parsing because of its filename
    #[error("{message}")]
    UnsupportedFile {
        /// The original gate message, e.g. "File must be a CSV file"
        message: String,
    },

    /// I/O failure while reading an input file
    #[error("I/O error: {message}")]
    Io {
        /// Description of the underlying failure
        message: String,
    },

    /// Anything unanticipated; surfaced without internal detail
    #[error("Internal error: {message}")]
    Internal {
        /// Short description, safe to expose
        message: String,
    },
}

// Conversion from io::Error for the CLI file boundary
impl From<std::io::Error> for DeskError {
    fn from(error: std::io::Error) -> Self {
        DeskError::Io {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl DeskError {
    /// Build a validation error from a collected report
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation { errors }
    }

    /// Build a not-found error for the given record family and id
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Build an upload-gate rejection carrying its exact message
    pub fn unsupported_file(message: impl Into<String>) -> Self {
        Self::UnsupportedFile {
            message: message.into(),
        }
    }

    /// Build an internal error with a short, safe description
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_displays_field_and_message() {
        let err = FieldError::new("subject", "Subject is required");
        assert_eq!(err.to_string(), "subject: Subject is required");
    }

    #[test]
    fn test_validation_error_joins_all_failures() {
        let err = DeskError::validation(vec![
            FieldError::new("amount", "Amount must be a positive number"),
            FieldError::new(
                "currency",
                "Currency must be a valid ISO 4217 code. Received: XXX",
            ),
        ]);
        let rendered = err.to_string();
        assert!(rendered.starts_with("Validation failed: "));
        assert!(rendered.contains("amount: Amount must be a positive number"));
        assert!(rendered.contains("; currency: "));
    }

    #[test]
    fn test_not_found_names_entity_and_id() {
        let err = DeskError::not_found("Transaction", "abc-123");
        assert_eq!(err.to_string(), "Transaction with ID 'abc-123' not found");
    }

    #[test]
    fn test_io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: DeskError = io.into();
        assert!(matches!(err, DeskError::Io { .. }));
    }
}
