//! Client error types.

use thiserror::Error;

/// Errors that can occur when talking to the checklist service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered 404 (unknown checklist or item).
    #[error("not found: {message}")]
    NotFound { message: String },

    /// The service rejected the request as malformed (400).
    #[error("bad request: {message}")]
    BadRequest { message: String },

    /// Any other non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The configured base URL is not an absolute http(s) URL.
    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),
}
