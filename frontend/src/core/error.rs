//! # Common Error Types
//!
//! Error handling for the trade journal client.
//!
//! Every failed backend call surfaces as an [`ApiError`], the normalized error
//! envelope: a numeric status code, a human-readable message and optional
//! machine-readable details. UI code is expected to branch on these fields
//! (for example redirecting to the login page on a 401).
//!
//! ## Error Categories
//!
//! Errors are categorized by [`ErrorKind`]:
//!
//! - **MissingCredential**: the request requires auth but no token is stored.
//!   Raised locally, no network call is made. Status is always 401.
//! - **Transport**: the request never completed (connection refused, DNS, TLS).
//!   Status is 0.
//! - **Status**: the backend answered with a non-2xx status.
//! - **MalformedBody**: the response body could not be decoded into the expected shape.
//! - **InvalidRequest**: the request body could not be serialized. Status is 0.
//!
//! Storage failures use the separate [`StorageError`]; the auth store logs them
//! instead of propagating them.
//!
//! ## Usage Pattern
//!
//! ```rust
//! use frontend::core::error::{ApiError, ErrorKind};
//!
//! fn describe(err: &ApiError) -> &'static str {
//!     match err.kind {
//!         ErrorKind::MissingCredential => "please log in",
//!         _ if err.is_unauthorized() => "session expired",
//!         _ => "something went wrong",
//!     }
//! }
//!
//! assert_eq!(describe(&ApiError::missing_credential()), "please log in");
//! ```

use thiserror::Error;

/// Message used when the backend gives no usable error text.
pub const GENERIC_FAILURE: &str = "Request failed";

/// Message used when an authenticated request is attempted without a token.
pub const MISSING_TOKEN: &str = "No authentication token found";

/// Classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Auth required but no token available
    MissingCredential,
    /// Network call did not complete
    Transport,
    /// Server returned a non-2xx status
    Status,
    /// Response body did not match the declared content type or expected shape
    MalformedBody,
    /// Request body could not be serialized
    InvalidRequest,
}

/// Normalized failure of a backend call.
///
/// `status` is the HTTP status of the response, 401 for a missing credential,
/// and 0 when no response was received.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message} (status {status})")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub status: u16,
    pub message: String,
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(
        kind: ErrorKind,
        status: u16,
        message: impl Into<String>,
        details: Option<String>,
    ) -> Self {
        Self {
            kind,
            status,
            message: message.into(),
            details,
        }
    }

    pub fn missing_credential() -> Self {
        Self::new(ErrorKind::MissingCredential, 401, MISSING_TOKEN, None)
    }

    pub fn transport(details: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, 0, "Network error", Some(details.into()))
    }

    /// Non-2xx response. An empty message falls back to [`GENERIC_FAILURE`].
    pub fn status(status: u16, message: impl Into<String>, details: Option<String>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            message
        };
        Self::new(ErrorKind::Status, status, message, details)
    }

    pub fn malformed_body(status: u16, details: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::MalformedBody,
            status,
            GENERIC_FAILURE,
            Some(details.into()),
        )
    }

    pub fn invalid_request(details: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::InvalidRequest,
            0,
            "Invalid request",
            Some(details.into()),
        )
    }

    /// 401 from the backend or a locally missing token.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Failure of the key-value persistence backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage data corrupted: {0}")]
    Corrupted(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_is_401() {
        let err = ApiError::missing_credential();
        assert_eq!(err.kind, ErrorKind::MissingCredential);
        assert_eq!(err.status, 401);
        assert_eq!(err.message, MISSING_TOKEN);
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_status_error_falls_back_to_generic_message() {
        let err = ApiError::status(502, "", None);
        assert_eq!(err.message, GENERIC_FAILURE);
        assert_eq!(err.to_string(), "Request failed (status 502)");
    }

    #[test]
    fn test_transport_error_has_no_status() {
        let err = ApiError::transport("connection refused");
        assert_eq!(err.status, 0);
        assert_eq!(err.details.as_deref(), Some("connection refused"));
        assert!(!err.is_unauthorized());
    }
}
