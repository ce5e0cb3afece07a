//! Error types for pagination and ordering helpers.
//!
//! Pagination parameters never fail: bad `page`/`limit` values fall back to defaults.
//! The variants here cover ordering expressions and configuration, and can be turned
//! into a structured body for API error responses.

use serde::Serialize;
use thiserror::Error;

/// Main error type for pagelinks operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Ordering expression is not of the form `field,direction`
    #[error("Malformed ordering expression: {0}")]
    MalformedInput(String),

    /// Ordering field is not in the allow-list
    #[error("Invalid ordering field: {0}")]
    InvalidField(String),

    /// Ordering direction is neither `asc` nor `desc`
    #[error("Invalid ordering direction: {0}")]
    InvalidDirection(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Specialized result type for pagelinks operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Structured error response for serialization.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorDetail,
    /// Optional request ID for tracing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// Error detail structure.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedInput(_) => "MALFORMED_INPUT",
            Self::InvalidField(_) => "INVALID_FIELD",
            Self::InvalidDirection(_) => "INVALID_DIRECTION",
            Self::ConfigError(_) => "CONFIG_ERROR",
        }
    }

    /// Returns true if the error was caused by client input rather than by
    /// the service's own setup.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedInput(_) | Self::InvalidField(_) | Self::InvalidDirection(_)
        )
    }

    /// Converts the error into an `ErrorResponse`.
    #[must_use]
    pub fn into_error_response(self) -> ErrorResponse {
        self.into_error_response_with_id(None)
    }

    /// Converts the error into an `ErrorResponse` with a request ID.
    #[must_use]
    pub fn into_error_response_with_id(self, request_id: Option<String>) -> ErrorResponse {
        let details = match &self {
            Self::MalformedInput(value)
            | Self::InvalidField(value)
            | Self::InvalidDirection(value) => Some(serde_json::json!({ "value": value })),
            Self::ConfigError(_) => None,
        };

        ErrorResponse {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message: self.to_string(),
                details,
            },
            request_id,
        }
    }
}
