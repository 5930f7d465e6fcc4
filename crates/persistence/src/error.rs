//! Error types for the persistence layer.
//!
//! Errors are split by where they originate: the caller's input
//! ([`ValidationError`]), the addressed document ([`ResourceError`]), or the
//! search engine itself ([`BackendError`]). Repositories never recover from
//! backend errors; they are returned to the caller unchanged.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Document state errors
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// Caller input rejected before anything was sent to the backend
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Backend-specific errors
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl StorageError {
    /// Builds a precondition error for the named operation.
    pub fn precondition(operation: impl Into<String>, message: impl Into<String>) -> Self {
        StorageError::Validation(ValidationError::Precondition {
            operation: operation.into(),
            message: message.into(),
        })
    }

    /// Returns true if the error was raised before contacting the backend.
    pub fn is_validation(&self) -> bool {
        matches!(self, StorageError::Validation(_))
    }
}

/// Errors related to a single addressed document.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The requested document was not found.
    #[error("document not found: {index}/{id}")]
    NotFound { index: String, id: String },
}

/// Errors raised while validating caller input.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// An operation precondition was violated (empty terms list, page < 1, ...).
    #[error("precondition failed for {operation}: {message}")]
    Precondition { operation: String, message: String },

    /// A document submitted for storage is invalid.
    #[error("invalid document: {message}")]
    InvalidDocument { message: String },
}

/// Errors originating from the search engine backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend could not be reached or did not answer in time.
    #[error("backend unavailable: {backend_name}: {message}")]
    Unavailable {
        backend_name: String,
        message: String,
    },

    /// The client could not be configured for the backend.
    #[error("connection failed to {backend_name}: {message}")]
    ConnectionFailed {
        backend_name: String,
        message: String,
    },

    /// The backend refused the supplied credentials.
    #[error("authentication rejected by {backend_name}: {message}")]
    Authentication {
        backend_name: String,
        message: String,
    },

    /// The backend rejected the request (malformed query, missing index, ...).
    #[error("request rejected by {backend_name} (status {status}): {message}")]
    QueryRejected {
        backend_name: String,
        status: u16,
        message: String,
    },

    /// A response or document could not be (de)serialized.
    #[error("serialization error: {message}")]
    Deserialization { message: String },

    /// Internal backend error.
    #[error("internal error in {backend_name}: {message}")]
    Internal {
        backend_name: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_display() {
        let err = StorageError::precondition("terms", "at least one value is required");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "precondition failed for terms: at least one value is required"
        );
    }

    #[test]
    fn test_backend_error_is_transparent() {
        let err: StorageError = BackendError::QueryRejected {
            backend_name: "elasticsearch".to_string(),
            status: 400,
            message: "parsing_exception".to_string(),
        }
        .into();
        assert!(!err.is_validation());
        assert!(err.to_string().contains("status 400"));
        assert!(err.to_string().contains("parsing_exception"));
    }

    #[test]
    fn test_not_found_display() {
        let err = ResourceError::NotFound {
            index: "products".to_string(),
            id: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "document not found: products/abc");
    }
}
