//! Typed error handling for the mealdrop API
//!
//! Every guard and handler surfaces failures through [`ApiError`], which maps
//! directly onto the HTTP error envelope `{ "error": <message> }`.
//!
//! # Error Categories
//!
//! - [`ApiError::NotFound`]: unknown record identifier (404)
//! - [`ApiError::InvalidInput`]: any validation failure (400)
//! - [`ApiError::MethodNotAllowed`]: verb not mapped on a matched path (405)
//! - [`ApiError::Internal`]: store/lock failures (500)

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The main error type for the mealdrop API
///
/// Validation and lookup failures carry the exact message that ends up in the
/// HTTP error envelope; clients match on the message text.
#[derive(Debug)]
pub enum ApiError {
    /// Record lookup by identifier failed
    NotFound {
        resource: &'static str,
        id: String,
    },

    /// Request payload failed a validation guard
    InvalidInput {
        message: String,
    },

    /// Verb not mapped on a matched path family
    MethodNotAllowed {
        method: String,
        path: String,
    },

    /// Store failures (should not happen in normal operation)
    Internal {
        message: String,
    },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound { resource, id } => {
                write!(f, "{} not found: {}", resource, id)
            }
            ApiError::InvalidInput { message } => write!(f, "{}", message),
            ApiError::MethodNotAllowed { method, path } => {
                write!(f, "Method {} not allowed on {}", method, path)
            }
            ApiError::Internal { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for ApiError {}

/// Error response structure for HTTP responses
///
/// The wire format is `{ "error": <message> }`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message
    pub error: String,
}

impl ApiError {
    /// Shorthand for a validation failure
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ApiError::InvalidInput {
            message: message.into(),
        }
    }

    /// Shorthand for an unknown-identifier failure
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        ApiError::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::InvalidInput { .. } => "INVALID_INPUT",
            ApiError::MethodNotAllowed { .. } => "METHOD_NOT_ALLOWED",
            ApiError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Convert to the HTTP error envelope body
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_body());
        (status, body).into_response()
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidInput {
            message: format!("Invalid request body: {}", err),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal {
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for mealdrop handlers and guards
pub type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// Tests
// =============================================================================
