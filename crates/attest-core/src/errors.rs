//! Cross-cutting error types for Attest.
//!
//! The checklist store only ever raises [`CoreError::NotFound`]. `Validation`
//! is raised by request payload checks before the store is reached.

use thiserror::Error;

use crate::enums::EntityType;
use crate::ids::{ChecklistId, ItemId};

/// Errors that can be raised by any Attest crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("{} not found: {id}", .entity_type.label())]
    NotFound { entity_type: EntityType, id: i64 },

    /// Data failed validation (missing fields, unknown values).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    #[must_use]
    pub const fn checklist_not_found(id: ChecklistId) -> Self {
        Self::NotFound {
            entity_type: EntityType::Checklist,
            id: id.get(),
        }
    }

    #[must_use]
    pub const fn item_not_found(id: ItemId) -> Self {
        Self::NotFound {
            entity_type: EntityType::ChecklistItem,
            id: id.get(),
        }
    }

    /// Whether this is a not-found error for the given entity type.
    #[must_use]
    pub fn is_not_found(&self, entity: EntityType) -> bool {
        matches!(self, Self::NotFound { entity_type, .. } if *entity_type == entity)
    }
}
