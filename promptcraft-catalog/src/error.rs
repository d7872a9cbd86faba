//! Error types for catalog operations

use crate::submission::ValidationIssue;
use promptcraft_common::{ErrorSeverity, RecordId, Severity};
use thiserror::Error;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur during catalog operations
///
/// Malformed filter criteria are deliberately NOT represented here: an
/// unrecognized facet selection degrades to "matches nothing" inside the
/// filter rather than surfacing as an error.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No record with the given id exists
    #[error("Record not found: {id}")]
    NotFound {
        /// The identifier that was looked up
        id: RecordId,
    },

    /// A record with the given id already exists
    #[error("Duplicate record id: {id}")]
    DuplicateId {
        /// The conflicting identifier
        id: RecordId,
    },

    /// The operation requires a signed-in user
    #[error("Sign in required")]
    Unauthenticated,

    /// The operation may only be performed by the record's author
    #[error("Only the author may modify this record")]
    NotOwner,

    /// The submitted payload failed validation
    #[error("Validation failed with {} issue(s)", .0.len())]
    Invalid(Vec<ValidationIssue>),

    /// A string did not name a known enum variant
    #[error("Unknown {kind}: {value}")]
    UnknownVariant {
        /// Which enum was being parsed
        kind: &'static str,
        /// The offending input
        value: String,
    },

    /// The underlying store failed
    #[error("Storage error: {0}")]
    Storage(String),
}

impl Severity for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            CatalogError::UnknownVariant { .. } => ErrorSeverity::Warning,
            CatalogError::Storage(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::NotFound {
            id: RecordId::new("42"),
        };
        assert_eq!(err.to_string(), "Record not found: 42");

        let err = CatalogError::UnknownVariant {
            kind: "difficulty",
            value: "expert".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown difficulty: expert");
    }

    #[test]
    fn test_error_severity() {
        assert_eq!(
            CatalogError::Unauthenticated.severity(),
            ErrorSeverity::Error
        );
        assert!(CatalogError::Storage("disk".to_string()).is_critical());
        assert_eq!(
            CatalogError::UnknownVariant {
                kind: "provider",
                value: "mistral".to_string()
            }
            .severity(),
            ErrorSeverity::Warning
        );
    }
}
