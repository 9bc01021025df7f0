//! Request payloads accepted by the HTTP API.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ChecklistItemStatus;
use crate::errors::CoreError;

/// Body of `PUT|POST /api/checklists/{id}/items/{itemId}/status`.
///
/// `status` is optional at the type level so an absent or `null` value can be
/// reported as a validation failure instead of a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemStatusRequest {
    #[serde(default)]
    pub status: Option<ChecklistItemStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Vec<String>>,
}

impl UpdateItemStatusRequest {
    #[must_use]
    pub const fn new(status: ChecklistItemStatus, evidence: Option<Vec<String>>) -> Self {
        Self {
            status: Some(status),
            evidence,
        }
    }

    /// Split into the required status and the optional replacement evidence.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when `status` is missing or null.
    pub fn into_parts(self) -> Result<(ChecklistItemStatus, Option<Vec<String>>), CoreError> {
        let status = self
            .status
            .ok_or_else(|| CoreError::Validation("status must not be null".into()))?;
        Ok((status, self.evidence))
    }
}
