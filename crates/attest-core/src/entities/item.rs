use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ChecklistItemStatus;
use crate::ids::ItemId;

/// A single auditable requirement with its review status and evidence.
///
/// `hints` is reference material fixed at creation. `status` and `evidence`
/// change only through the store's update operation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub id: ItemId,
    pub category: String,
    pub requirement: String,
    #[serde(default)]
    pub hints: Vec<String>,
    #[serde(default)]
    pub status: ChecklistItemStatus,
    #[serde(default)]
    pub evidence: Vec<String>,
}

impl ChecklistItem {
    /// A fresh item: `Pending`, no evidence.
    #[must_use]
    pub fn new(
        id: ItemId,
        category: impl Into<String>,
        requirement: impl Into<String>,
        hints: Vec<String>,
    ) -> Self {
        Self {
            id,
            category: category.into(),
            requirement: requirement.into(),
            hints,
            status: ChecklistItemStatus::Pending,
            evidence: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_evidence(mut self, evidence: Vec<String>) -> Self {
        self.evidence = evidence;
        self
    }
}
