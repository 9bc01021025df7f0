//! # attest-store
//!
//! In-memory state for Attest: every checklist, its items, and their review
//! status live in a [`ChecklistStore`] owned by the host process.
//!
//! The store hands out copies only. Internally each checklist sits behind its
//! own `RwLock`, so readers of one checklist never wait on writers of another,
//! and an item update (status + evidence) is applied under a single write
//! guard.

mod progress;
mod record;
pub mod seed;
mod store;

pub use progress::completion_percentage;
pub use store::ChecklistStore;
