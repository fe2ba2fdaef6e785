//! Error handling for dispatch and sorting

use crate::reflect::Kind;
use thiserror::Error;

/// Custom error type for sort operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    #[error("sort only works on sequences: {type_name} is {kind}")]
    NotASequence { type_name: &'static str, kind: Kind },

    #[error("unsupported element kind {kind} in {type_name}")]
    UnsupportedElementKind { type_name: &'static str, kind: Kind },

    #[error("elements of {type_name} do not match their declared kind {kind}")]
    KindMismatch { type_name: &'static str, kind: Kind },

    #[error("no concrete adapter for {type_name} and reflective fallback is disabled")]
    FallbackDisabled { type_name: &'static str },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl SortError {
    /// Whether the error was raised while choosing an adapter
    pub fn is_dispatch_error(&self) -> bool {
        matches!(
            self,
            SortError::NotASequence { .. }
                | SortError::UnsupportedElementKind { .. }
                | SortError::KindMismatch { .. }
                | SortError::FallbackDisabled { .. }
        )
    }

    /// Create a not-a-sequence error
    pub fn not_a_sequence(type_name: &'static str, kind: Kind) -> Self {
        SortError::NotASequence { type_name, kind }
    }

    /// Create an unsupported element kind error
    pub fn unsupported_element_kind(type_name: &'static str, kind: Kind) -> Self {
        SortError::UnsupportedElementKind { type_name, kind }
    }

    /// Create an error for elements whose values contradict their kind
    pub fn kind_mismatch(type_name: &'static str, kind: Kind) -> Self {
        SortError::KindMismatch { type_name, kind }
    }

    /// Create a fallback disabled error
    pub fn fallback_disabled(type_name: &'static str) -> Self {
        SortError::FallbackDisabled { type_name }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(message: &str) -> Self {
        SortError::InvalidConfig {
            message: message.to_string(),
        }
    }

    /// Create an internal error
    pub fn internal(message: &str) -> Self {
        SortError::Internal {
            message: message.to_string(),
        }
    }
}

/// Result type for sort operations
pub type SortResult<T> = Result<T, SortError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SortError::not_a_sequence("i64", Kind::Int64);
        assert_eq!(err.to_string(), "sort only works on sequences: i64 is int64");

        let err = SortError::unsupported_element_kind("Vec<Point>", Kind::Struct);
        assert_eq!(err.to_string(), "unsupported element kind struct in Vec<Point>");

        let err = SortError::kind_mismatch("Vec<Level>", Kind::Int32);
        assert_eq!(
            err.to_string(),
            "elements of Vec<Level> do not match their declared kind int32"
        );
    }

    #[test]
    fn test_dispatch_classification() {
        assert!(SortError::not_a_sequence("bool", Kind::Bool).is_dispatch_error());
        assert!(SortError::fallback_disabled("Vec<Name>").is_dispatch_error());
        assert!(SortError::kind_mismatch("Vec<Level>", Kind::Int8).is_dispatch_error());
        assert!(!SortError::invalid_config("bad").is_dispatch_error());
        assert!(!SortError::internal("oops").is_dispatch_error());
    }
}
