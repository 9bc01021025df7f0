//! Status enums and entity types for Attest.
//!
//! Statuses serialize in upper snake case (`"PASSED"`, `"NOT_APPLICABLE"`),
//! matching what checklist clients already send and expect.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// ChecklistItemStatus
// ---------------------------------------------------------------------------

/// Review status of a single checklist item.
///
/// Every item starts as `Pending`. There is no transition table: any status
/// may replace any other, and the last update wins.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChecklistItemStatus {
    #[default]
    Pending,
    Passed,
    Failed,
    NotApplicable,
}

impl ChecklistItemStatus {
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Passed,
        Self::Failed,
        Self::NotApplicable,
    ];

    /// Whether an item in this status counts towards checklist completion.
    ///
    /// Progress is computed exclusively through this predicate.
    #[must_use]
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Passed)
    }

    /// Return the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Passed => "PASSED",
            Self::Failed => "FAILED",
            Self::NotApplicable => "NOT_APPLICABLE",
        }
    }
}

impl fmt::Display for ChecklistItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive; `-` and `_` are interchangeable (`not-applicable`).
impl FromStr for ChecklistItemStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "unknown checklist item status '{s}' (expected one of: pending, passed, failed, not_applicable)"
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// Kind of entity an error or lookup refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Checklist,
    ChecklistItem,
}

impl EntityType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Checklist => "checklist",
            Self::ChecklistItem => "checklist_item",
        }
    }

    /// Human-readable label, e.g. `"Checklist item"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Checklist => "Checklist",
            Self::ChecklistItem => "Checklist item",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
