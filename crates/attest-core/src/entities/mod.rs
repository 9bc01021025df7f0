//! Entity structs for Attest domain objects.
//!
//! These are the values handed to callers. They are plain owned data: the
//! store never gives out references into its own state, only fresh copies.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation.

mod checklist;
mod item;

pub use checklist::Checklist;
pub use item::ChecklistItem;
