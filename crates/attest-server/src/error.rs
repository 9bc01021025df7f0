//! Server and API error types.

use std::net::SocketAddr;

use attest_config::ConfigError;
use attest_core::errors::CoreError;
use attest_core::responses::ErrorResponse;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors raised while setting up or running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listen address could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// A configured CORS origin is not a valid header value.
    #[error("invalid CORS origin '{0}'")]
    InvalidOrigin(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// An error returned to an HTTP caller as `{"error": {"code", "message"}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "invalid_request", message)
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound { entity_type, .. } => Self::new(
                StatusCode::NOT_FOUND,
                "not_found",
                format!("{} not found", entity_type.label()),
            ),
            CoreError::Validation(message) => {
                Self::new(StatusCode::BAD_REQUEST, "validation_failed", message)
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::invalid_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::invalid_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(status = %self.status, code = self.code, message = %self.message, "request failed");
        (self.status, Json(ErrorResponse::new(self.code, self.message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attest_core::ids::{ChecklistId, ItemId};

    #[test]
    fn not_found_maps_to_404_with_entity_message() {
        let api = ApiError::from(CoreError::checklist_not_found(ChecklistId(9)));
        assert_eq!(api.status, StatusCode::NOT_FOUND);
        assert_eq!(api.code, "not_found");
        assert_eq!(api.message, "Checklist not found");

        let api = ApiError::from(CoreError::item_not_found(ItemId(9)));
        assert_eq!(api.message, "Checklist item not found");
    }

    #[test]
    fn validation_maps_to_400() {
        let api = ApiError::from(CoreError::Validation("status must not be null".into()));
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert_eq!(api.code, "validation_failed");
    }
}
