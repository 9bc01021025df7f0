//! # attest-client
//!
//! Typed HTTP client for a running Attest checklist service.
//!
//! All requests go to `{base_url}/api/checklists...`. Errors returned by the
//! service are mapped onto [`ClientError`] so callers can tell an unknown
//! checklist (`NotFound`) from a rejected request (`BadRequest`).

mod error;
mod http;

pub use error::ClientError;

use std::time::Duration;

use attest_config::ClientConfig;
use attest_core::entities::{Checklist, ChecklistItem};
use attest_core::enums::ChecklistItemStatus;
use attest_core::ids::{ChecklistId, ItemId};
use attest_core::requests::UpdateItemStatusRequest;
use attest_core::responses::{HealthResponse, ProgressSummary};
use serde::de::DeserializeOwned;

use crate::http::check_response;

const CHECKLISTS_PATH: &str = "/api/checklists";

/// HTTP client for the checklist service.
#[derive(Debug, Clone)]
pub struct ChecklistClient {
    http: reqwest::Client,
    base_url: String,
}

impl ChecklistClient {
    /// Create a client for the service rooted at `base_url`.
    ///
    /// A trailing `/` on `base_url` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if `base_url` is not an http(s)
    /// URL, or [`ClientError::Http`] if the underlying client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("attest/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: trimmed.to_string(),
        })
    }

    /// Create a client from the `[client]` config section.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::new(&config.base_url, config.timeout())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{CHECKLISTS_PATH}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ClientError> {
        tracing::debug!(%url, "GET");
        let resp = check_response(self.http.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// `GET /api/checklists`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status.
    pub async fn list_checklists(&self) -> Result<Vec<Checklist>, ClientError> {
        self.get_json(self.url("")).await
    }

    /// `GET /api/checklists/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] for an unknown checklist.
    pub async fn get_checklist(&self, id: ChecklistId) -> Result<Checklist, ClientError> {
        self.get_json(self.url(&format!("/{id}"))).await
    }

    /// `GET /api/checklists/{id}/progress`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] for an unknown checklist.
    pub async fn get_progress(&self, id: ChecklistId) -> Result<ProgressSummary, ClientError> {
        self.get_json(self.url(&format!("/{id}/progress"))).await
    }

    /// `PUT /api/checklists/{id}/items/{item_id}/status`.
    ///
    /// `evidence: None` leaves the item's evidence as it is; `Some` replaces it.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] for an unknown checklist or item.
    pub async fn update_item_status(
        &self,
        id: ChecklistId,
        item_id: ItemId,
        status: ChecklistItemStatus,
        evidence: Option<Vec<String>>,
    ) -> Result<ChecklistItem, ClientError> {
        let url = self.url(&format!("/{id}/items/{item_id}/status"));
        let body = UpdateItemStatusRequest::new(status, evidence);
        tracing::debug!(%url, %status, "PUT");
        let resp = check_response(self.http.put(&url).json(&body).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// `GET /health`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the service is unreachable or unhealthy.
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        self.get_json(format!("{}/health", self.base_url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(1);

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = ChecklistClient::new("http://localhost:8080/", TIMEOUT).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(
            client.url("/1/progress"),
            "http://localhost:8080/api/checklists/1/progress"
        );
    }

    #[test]
    fn rejects_base_url_without_scheme() {
        let err = ChecklistClient::new("localhost:8080", TIMEOUT).unwrap_err();
        assert!(matches!(err, ClientError::InvalidBaseUrl(_)));
    }

    #[test]
    fn builds_from_default_config() {
        let client = ChecklistClient::from_config(&ClientConfig::default()).unwrap();
        assert_eq!(client.url(""), "http://localhost:8080/api/checklists");
    }

    #[test]
    fn parses_checklist_fixture() {
        const FIXTURE: &str = r#"[{
            "id": 1,
            "name": "ISO 27001 Essential Controls",
            "items": [{
                "id": 101,
                "category": "Access Control",
                "requirement": "Password policy exists",
                "hints": ["Link to current password standard"],
                "status": "PASSED",
                "evidence": ["doc.pdf"]
            }]
        }]"#;
        let data: Vec<Checklist> = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(data[0].items[0].status, ChecklistItemStatus::Passed);
        assert_eq!(data[0].items[0].evidence, vec!["doc.pdf".to_string()]);
    }
}
