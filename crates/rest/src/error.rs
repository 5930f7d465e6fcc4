//! Error types for the Storefront search API.
//!
//! This module defines all error types used throughout the REST API layer,
//! with automatic conversion to the JSON response envelope.
//!
//! # Error Mapping
//!
//! Storage errors from the persistence layer are automatically mapped to
//! appropriate HTTP status codes:
//!
//! | Storage Error | HTTP Status |
//! |--------------|-------------|
//! | Validation (precondition, invalid document) | 400 |
//! | NotFound | 404 |
//! | Authentication | 502 |
//! | QueryRejected | 502 |
//! | Unavailable / ConnectionFailed | 503 |
//! | Deserialization / Internal | 500 |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use storefront_persistence::error::{BackendError, ResourceError, StorageError, ValidationError};
use tracing::{error, warn};

use crate::responses::ApiResponse;

/// The primary error type for REST API operations.
///
/// This enum provides semantic error types that map cleanly to HTTP status codes.
#[derive(Debug)]
pub enum RestError {
    /// Document not found (HTTP 404).
    NotFound {
        /// The index searched.
        index: String,
        /// The document ID.
        id: String,
    },

    /// Bad request - invalid parameters or body (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// The search engine rejected the request or our credentials (HTTP 502).
    BadGateway {
        /// Error message.
        message: String,
    },

    /// The search engine could not be reached (HTTP 503).
    ServiceUnavailable {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { index, id } => {
                write!(f, "Document not found: {}/{}", index, id)
            }
            RestError::BadRequest { message } => {
                write!(f, "Bad request: {}", message)
            }
            RestError::BadGateway { message } => {
                write!(f, "Search engine error: {}", message)
            }
            RestError::ServiceUnavailable { message } => {
                write!(f, "Search engine unavailable: {}", message)
            }
            RestError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for RestError {}

impl RestError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::BadGateway { .. } => StatusCode::BAD_GATEWAY,
            RestError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Creates a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        RestError::BadRequest {
            message: message.into(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let body = ApiResponse::<()>::failure(vec![self.to_string()]);
        (status, Json(body)).into_response()
    }
}

// Implement conversions from storage errors

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Resource(e) => e.into(),
            StorageError::Validation(e) => e.into(),
            StorageError::Backend(e) => e.into(),
        }
    }
}

impl From<ResourceError> for RestError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::NotFound { index, id } => RestError::NotFound { index, id },
        }
    }
}

impl From<ValidationError> for RestError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Precondition { operation, message } => RestError::BadRequest {
                message: format!("Invalid {} request: {}", operation, message),
            },
            ValidationError::InvalidDocument { message } => RestError::BadRequest { message },
        }
    }
}

impl From<BackendError> for RestError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Unavailable { .. } | BackendError::ConnectionFailed { .. } => {
                RestError::ServiceUnavailable {
                    message: err.to_string(),
                }
            }
            BackendError::Authentication { .. } | BackendError::QueryRejected { .. } => {
                RestError::BadGateway {
                    message: err.to_string(),
                }
            }
            BackendError::Deserialization { .. } | BackendError::Internal { .. } => {
                RestError::InternalError {
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = RestError::NotFound {
            index: "products".to_string(),
            id: "123".to_string(),
        };
        assert_eq!(err.to_string(), "Document not found: products/123");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_precondition_maps_to_bad_request() {
        let err: RestError = StorageError::precondition("terms", "at least one value is required").into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("at least one value is required"));
    }

    #[test]
    fn test_backend_error_mapping() {
        let cases = [
            (
                BackendError::Unavailable {
                    backend_name: "elasticsearch".to_string(),
                    message: "connection refused".to_string(),
                },
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                BackendError::ConnectionFailed {
                    backend_name: "elasticsearch".to_string(),
                    message: "bad url".to_string(),
                },
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                BackendError::Authentication {
                    backend_name: "elasticsearch".to_string(),
                    message: "401".to_string(),
                },
                StatusCode::BAD_GATEWAY,
            ),
            (
                BackendError::QueryRejected {
                    backend_name: "elasticsearch".to_string(),
                    status: 404,
                    message: "index_not_found_exception".to_string(),
                },
                StatusCode::BAD_GATEWAY,
            ),
            (
                BackendError::Deserialization {
                    message: "expected f64".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (backend_error, status) in cases {
            let err: RestError = StorageError::from(backend_error).into();
            assert_eq!(err.status_code(), status, "{}", err);
        }
    }

    #[test]
    fn test_into_response_status() {
        let response = RestError::bad_request("page must be at least 1").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
