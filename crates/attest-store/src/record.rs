//! Internal representation of stored checklists.
//!
//! Records are never exposed. Every read goes through `snapshot`, which builds
//! a fresh public entity field by field.

use attest_core::entities::{Checklist, ChecklistItem};
use attest_core::enums::ChecklistItemStatus;
use attest_core::ids::{ChecklistId, ItemId};

#[derive(Debug)]
pub(crate) struct ChecklistRecord {
    pub(crate) id: ChecklistId,
    pub(crate) name: String,
    pub(crate) items: Vec<ItemRecord>,
}

#[derive(Debug)]
pub(crate) struct ItemRecord {
    pub(crate) id: ItemId,
    category: String,
    requirement: String,
    hints: Box<[String]>,
    pub(crate) status: ChecklistItemStatus,
    evidence: Vec<String>,
}

impl ChecklistRecord {
    pub(crate) fn snapshot(&self) -> Checklist {
        Checklist {
            id: self.id,
            name: self.name.clone(),
            items: self.items.iter().map(ItemRecord::snapshot).collect(),
        }
    }

    pub(crate) fn item_mut(&mut self, item_id: ItemId) -> Option<&mut ItemRecord> {
        self.items.iter_mut().find(|item| item.id == item_id)
    }
}

impl ItemRecord {
    pub(crate) fn snapshot(&self) -> ChecklistItem {
        ChecklistItem {
            id: self.id,
            category: self.category.clone(),
            requirement: self.requirement.clone(),
            hints: self.hints.to_vec(),
            status: self.status,
            evidence: self.evidence.clone(),
        }
    }

    /// Set the status and, when given, replace the evidence wholesale.
    pub(crate) fn apply(&mut self, status: ChecklistItemStatus, evidence: Option<Vec<String>>) {
        self.status = status;
        if let Some(evidence) = evidence {
            self.evidence = evidence;
        }
    }
}

impl From<Checklist> for ChecklistRecord {
    fn from(checklist: Checklist) -> Self {
        Self {
            id: checklist.id,
            name: checklist.name,
            items: checklist.items.into_iter().map(ItemRecord::from).collect(),
        }
    }
}

impl From<ChecklistItem> for ItemRecord {
    fn from(item: ChecklistItem) -> Self {
        Self {
            id: item.id,
            category: item.category,
            requirement: item.requirement,
            hints: item.hints.into_boxed_slice(),
            status: item.status,
            evidence: item.evidence,
        }
    }
}
