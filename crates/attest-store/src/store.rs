//! The checklist store.

use std::collections::{BTreeMap, HashSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use attest_core::entities::{Checklist, ChecklistItem};
use attest_core::enums::ChecklistItemStatus;
use attest_core::errors::CoreError;
use attest_core::ids::{ChecklistId, ItemId};
use attest_core::responses::ProgressSummary;

use crate::progress;
use crate::record::ChecklistRecord;
use crate::seed;

type Checklists = BTreeMap<ChecklistId, RwLock<ChecklistRecord>>;

/// Process-lifetime store of every checklist.
///
/// Locking is two-level: the outer map lock is only write-locked while seeding;
/// every other operation takes it for reading and then locks the one checklist
/// it touches. Locks are always taken outer-then-inner and never re-entered.
///
/// A poisoned lock is recovered rather than propagated: the only mutation done
/// under a guard is a plain field assignment, so no guard can be left holding
/// half-applied state.
#[derive(Debug, Default)]
pub struct ChecklistStore {
    checklists: RwLock<Checklists>,
}

impl ChecklistStore {
    /// An empty store. Call [`Self::seed`] before serving requests.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store already holding the built-in dataset.
    #[must_use]
    pub fn seeded() -> Self {
        let store = Self::new();
        store.seed();
        store
    }

    /// Populate the built-in dataset if the store is empty.
    ///
    /// Returns `true` if this call populated the store, `false` if it was a
    /// no-op because checklists were already present.
    pub fn seed(&self) -> bool {
        // The built-in dataset is known to have unique ids.
        self.seed_with(seed::default_checklists()).unwrap_or(false)
    }

    /// Populate the store from `checklists` if it is empty.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if two checklists share an id, or two
    /// items within one checklist share an id. Nothing is inserted in that case.
    pub fn seed_with(&self, checklists: Vec<Checklist>) -> Result<bool, CoreError> {
        validate_dataset(&checklists)?;

        let mut map = write(&self.checklists);
        if !map.is_empty() {
            tracing::debug!(existing = map.len(), "checklist store already seeded; skipping");
            return Ok(false);
        }

        let total_items: usize = checklists.iter().map(|c| c.items.len()).sum();
        for checklist in checklists {
            map.insert(checklist.id, RwLock::new(ChecklistRecord::from(checklist)));
        }
        tracing::info!(checklists = map.len(), items = total_items, "seeded checklist store");
        Ok(true)
    }

    /// Number of checklists held.
    #[must_use]
    pub fn len(&self) -> usize {
        read(&self.checklists).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        read(&self.checklists).is_empty()
    }

    /// Every checklist, ascending by id, as independent copies.
    #[must_use]
    pub fn list_all(&self) -> Vec<Checklist> {
        read(&self.checklists)
            .values()
            .map(|record| read(record).snapshot())
            .collect()
    }

    /// A copy of one checklist.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] (checklist) if `checklist_id` is unknown.
    pub fn get(&self, checklist_id: ChecklistId) -> Result<Checklist, CoreError> {
        let map = read(&self.checklists);
        let record = map
            .get(&checklist_id)
            .ok_or(CoreError::checklist_not_found(checklist_id))?;
        Ok(read(record).snapshot())
    }

    /// Set an item's status and, if `evidence` is `Some`, replace its evidence.
    ///
    /// The whole update happens under the checklist's write lock, so concurrent
    /// updates to the same item never mix fields; the last one to commit wins.
    /// Returns a copy of the item as it stands afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] for an unknown checklist, then for an
    /// unknown item within it.
    pub fn update_item_status(
        &self,
        checklist_id: ChecklistId,
        item_id: ItemId,
        status: ChecklistItemStatus,
        evidence: Option<Vec<String>>,
    ) -> Result<ChecklistItem, CoreError> {
        let map = read(&self.checklists);
        let record = map
            .get(&checklist_id)
            .ok_or(CoreError::checklist_not_found(checklist_id))?;

        let mut checklist = write(record);
        let item = checklist
            .item_mut(item_id)
            .ok_or(CoreError::item_not_found(item_id))?;

        let replaces_evidence = evidence.is_some();
        item.apply(status, evidence);
        tracing::debug!(
            checklist = %checklist_id,
            item = %item_id,
            %status,
            replaces_evidence,
            "updated checklist item"
        );
        Ok(item.snapshot())
    }

    /// Completion summary for one checklist, taken from a single consistent view.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] (checklist) if `checklist_id` is unknown.
    pub fn get_progress(&self, checklist_id: ChecklistId) -> Result<ProgressSummary, CoreError> {
        let map = read(&self.checklists);
        let record = map
            .get(&checklist_id)
            .ok_or(CoreError::checklist_not_found(checklist_id))?;
        Ok(progress::summarize(&read(record)))
    }
}

fn validate_dataset(checklists: &[Checklist]) -> Result<(), CoreError> {
    let mut checklist_ids = HashSet::new();
    for checklist in checklists {
        if !checklist_ids.insert(checklist.id) {
            return Err(CoreError::Validation(format!(
                "duplicate checklist id {}",
                checklist.id
            )));
        }
        let mut item_ids = HashSet::new();
        for item in &checklist.items {
            if !item_ids.insert(item.id) {
                return Err(CoreError::Validation(format!(
                    "duplicate item id {} in checklist {}",
                    item.id, checklist.id
                )));
            }
        }
    }
    Ok(())
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
