//! Strongly typed identifiers for checklists and checklist items.
//!
//! Both wrap the plain integer used on the wire (`#[serde(transparent)]`), so
//! `{"id": 101}` round-trips without any envelope.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a [`Checklist`](crate::entities::Checklist), unique across the store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct ChecklistId(pub i64);

/// Identity of a [`ChecklistItem`](crate::entities::ChecklistItem), unique within
/// its owning checklist.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl ChecklistId {
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl ItemId {
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for ChecklistId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ChecklistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
