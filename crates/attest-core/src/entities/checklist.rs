use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::ChecklistItem;
use crate::ids::{ChecklistId, ItemId};

/// A named, ordered collection of checklist items.
///
/// Item order is display order. Item ids are unique within one checklist.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    pub id: ChecklistId,
    pub name: String,
    #[serde(default)]
    pub items: Vec<ChecklistItem>,
}

impl Checklist {
    #[must_use]
    pub fn new(id: ChecklistId, name: impl Into<String>, items: Vec<ChecklistItem>) -> Self {
        Self {
            id,
            name: name.into(),
            items,
        }
    }

    /// Look up an item by id.
    #[must_use]
    pub fn item(&self, item_id: ItemId) -> Option<&ChecklistItem> {
        self.items.iter().find(|item| item.id == item_id)
    }
}
