//! Shared HTTP response handling.
//!
//! Maps non-success statuses onto [`ClientError`], pulling the message out of
//! the service's `{"error": {"code", "message"}}` envelope when present.

use attest_core::responses::ErrorResponse;

use crate::error::ClientError;

/// Return the response unchanged on success, otherwise a typed error.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = error_message(&body);
    Err(match status.as_u16() {
        404 => ClientError::NotFound { message },
        400 => ClientError::BadRequest { message },
        code => ClientError::Api {
            status: code,
            message,
        },
    })
}

/// Prefer the envelope's message; fall back to the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map_or_else(|_| body.trim().to_string(), |envelope| envelope.error.message)
}
