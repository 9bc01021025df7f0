//! Behaviour of the checklist store as seen by its callers.

use std::sync::Arc;
use std::thread;

use attest_core::entities::{Checklist, ChecklistItem};
use attest_core::enums::{ChecklistItemStatus, EntityType};
use attest_core::ids::{ChecklistId, ItemId};
use attest_store::ChecklistStore;
use attest_store::seed::{ISO_27001_ID, default_checklists};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

const ISO: ChecklistId = ISO_27001_ID;

#[fixture]
fn store() -> ChecklistStore {
    ChecklistStore::seeded()
}

fn pass(store: &ChecklistStore, item: i64) {
    store
        .update_item_status(ISO, ItemId(item), ChecklistItemStatus::Passed, None)
        .expect("seeded item exists");
}

#[rstest]
fn list_all_matches_seeded_set_in_ascending_order(store: ChecklistStore) {
    let extra = Checklist::new(ChecklistId(-4), "Earlier", vec![]);
    let later = Checklist::new(ChecklistId(40), "Later", vec![]);
    let multi = ChecklistStore::new();
    let mut dataset = default_checklists();
    dataset.push(later);
    dataset.push(extra);
    multi.seed_with(dataset).unwrap();

    let ids: Vec<i64> = multi.list_all().iter().map(|c| c.id.get()).collect();
    assert_eq!(ids, vec![-4, 1, 40]);

    let seeded_ids: Vec<ChecklistId> = store.list_all().iter().map(|c| c.id).collect();
    assert_eq!(seeded_ids, vec![ISO]);
}

#[rstest]
fn get_equals_list_all_entry(store: ChecklistStore) {
    for listed in store.list_all() {
        assert_eq!(store.get(listed.id).unwrap(), listed);
    }
}

#[rstest]
#[case(0)]
#[case(2)]
#[case(999)]
#[case(-1)]
fn get_unknown_checklist_is_not_found(store: ChecklistStore, #[case] id: i64) {
    let err = store.get(ChecklistId(id)).unwrap_err();
    assert!(err.is_not_found(EntityType::Checklist));
}

#[rstest]
fn mutating_returned_values_does_not_leak_into_the_store(store: ChecklistStore) {
    let mut checklist = store.get(ISO).unwrap();
    checklist.name.push_str(" (edited)");
    checklist.items[0].status = ChecklistItemStatus::Passed;
    checklist.items[0].hints.clear();
    checklist.items[0].evidence.push("smuggled.pdf".into());
    checklist.items.pop();

    let mut listed = store.list_all();
    listed[0].items.clear();

    let mut updated = store
        .update_item_status(ISO, ItemId(102), ChecklistItemStatus::Failed, Some(vec!["a".into()]))
        .unwrap();
    updated.evidence.push("b".into());

    let fresh = store.get(ISO).unwrap();
    assert_eq!(fresh.name, "ISO 27001 Essential Controls");
    assert_eq!(fresh.items.len(), 9);
    assert_eq!(fresh.items[0].status, ChecklistItemStatus::Pending);
    assert_eq!(fresh.items[0].hints.len(), 2);
    assert!(fresh.items[0].evidence.is_empty());
    assert_eq!(fresh.item(ItemId(102)).unwrap().evidence, vec!["a".to_string()]);
}

#[rstest]
fn update_returns_new_state_and_is_visible_to_reads(store: ChecklistStore) {
    let item = store
        .update_item_status(
            ISO,
            ItemId(101),
            ChecklistItemStatus::Passed,
            Some(vec!["doc.pdf".into()]),
        )
        .unwrap();

    assert_eq!(item.id, ItemId(101));
    assert_eq!(item.status, ChecklistItemStatus::Passed);
    assert_eq!(item.evidence, vec!["doc.pdf".to_string()]);
    assert_eq!(item.category, "Access Control");

    let stored: ChecklistItem = store.get(ISO).unwrap().item(ItemId(101)).unwrap().clone();
    assert_eq!(stored, item);
}

#[rstest]
fn omitted_evidence_is_left_untouched(store: ChecklistStore) {
    store
        .update_item_status(
            ISO,
            ItemId(201),
            ChecklistItemStatus::Failed,
            Some(vec!["plan-v1.pdf".into(), "minutes.docx".into()]),
        )
        .unwrap();

    let item = store
        .update_item_status(ISO, ItemId(201), ChecklistItemStatus::Passed, None)
        .unwrap();

    assert_eq!(item.status, ChecklistItemStatus::Passed);
    assert_eq!(item.evidence, vec!["plan-v1.pdf".to_string(), "minutes.docx".to_string()]);
}

#[rstest]
fn unknown_checklist_then_unknown_item(store: ChecklistStore) {
    let err = store
        .update_item_status(ChecklistId(999), ItemId(101), ChecklistItemStatus::Passed, None)
        .unwrap_err();
    assert!(err.is_not_found(EntityType::Checklist));

    let err = store
        .update_item_status(ISO, ItemId(999), ChecklistItemStatus::Passed, None)
        .unwrap_err();
    assert!(err.is_not_found(EntityType::ChecklistItem));
}

#[rstest]
fn progress_after_seeding_is_zero(store: ChecklistStore) {
    let progress = store.get_progress(ISO).unwrap();
    assert_eq!(progress.checklist_id, ISO);
    assert_eq!(progress.name, "ISO 27001 Essential Controls");
    assert_eq!(progress.total_items, 9);
    assert_eq!(progress.passed_items, 0);
    assert!(progress.completion_percentage.abs() < f64::EPSILON);
}

#[rstest]
fn progress_counts_only_passed_items(store: ChecklistStore) {
    for item in [101, 202, 303] {
        pass(&store, item);
    }
    store
        .update_item_status(ISO, ItemId(102), ChecklistItemStatus::Failed, None)
        .unwrap();
    store
        .update_item_status(ISO, ItemId(103), ChecklistItemStatus::NotApplicable, None)
        .unwrap();

    let progress = store.get_progress(ISO).unwrap();
    assert_eq!(progress.total_items, 9);
    assert_eq!(progress.passed_items, 3);
    assert!((progress.completion_percentage - 33.333_333).abs() < 1e-4);
}

#[rstest]
fn progress_drops_when_passed_item_is_reopened(store: ChecklistStore) {
    pass(&store, 101);
    store
        .update_item_status(ISO, ItemId(101), ChecklistItemStatus::Pending, None)
        .unwrap();
    assert_eq!(store.get_progress(ISO).unwrap().passed_items, 0);
}

#[test]
fn progress_of_empty_checklist_is_zero() {
    let store = ChecklistStore::new();
    store
        .seed_with(vec![Checklist::new(ChecklistId(7), "Empty", vec![])])
        .unwrap();

    let progress = store.get_progress(ChecklistId(7)).unwrap();
    assert_eq!(progress.total_items, 0);
    assert_eq!(progress.passed_items, 0);
    assert!(progress.completion_percentage.abs() < f64::EPSILON);
    assert!(!progress.completion_percentage.is_nan());
}

#[rstest]
fn progress_for_unknown_checklist_is_not_found(store: ChecklistStore) {
    let err = store.get_progress(ChecklistId(999)).unwrap_err();
    assert!(err.is_not_found(EntityType::Checklist));
}

#[test]
fn concurrent_updates_to_different_items_all_persist() {
    let store = Arc::new(ChecklistStore::seeded());
    let items = [101, 102, 103, 201, 202, 203, 301, 302, 303];

    thread::scope(|scope| {
        for item in items {
            let store = Arc::clone(&store);
            scope.spawn(move || {
                store
                    .update_item_status(
                        ISO,
                        ItemId(item),
                        ChecklistItemStatus::Passed,
                        Some(vec![format!("evidence-{item}.pdf")]),
                    )
                    .unwrap();
            });
        }
    });

    let checklist = store.get(ISO).unwrap();
    for item in &checklist.items {
        assert_eq!(item.status, ChecklistItemStatus::Passed);
        assert_eq!(item.evidence, vec![format!("evidence-{}.pdf", item.id)]);
    }
    assert_eq!(store.get_progress(ISO).unwrap().passed_items, 9);
}

#[test]
fn concurrent_updates_to_one_item_never_mix_fields() {
    let store = Arc::new(ChecklistStore::seeded());
    let writers = [
        (ChecklistItemStatus::Passed, "passed.pdf"),
        (ChecklistItemStatus::Failed, "failed.pdf"),
    ];

    thread::scope(|scope| {
        for (status, evidence) in writers {
            let store = Arc::clone(&store);
            scope.spawn(move || {
                for _ in 0..200 {
                    store
                        .update_item_status(ISO, ItemId(101), status, Some(vec![evidence.into()]))
                        .unwrap();
                }
            });
        }
        let reader = Arc::clone(&store);
        scope.spawn(move || {
            for _ in 0..200 {
                let item = reader.get(ISO).unwrap().items[0].clone();
                assert_consistent(&item);
            }
        });
    });

    let item = store.get(ISO).unwrap().items[0].clone();
    assert_consistent(&item);
}

fn assert_consistent(item: &ChecklistItem) {
    match item.status {
        ChecklistItemStatus::Pending => assert!(item.evidence.is_empty()),
        ChecklistItemStatus::Passed => assert_eq!(item.evidence, vec!["passed.pdf".to_string()]),
        ChecklistItemStatus::Failed => assert_eq!(item.evidence, vec!["failed.pdf".to_string()]),
        ChecklistItemStatus::NotApplicable => panic!("no writer sets NOT_APPLICABLE"),
    }
}

#[test]
fn progress_snapshot_is_internally_consistent_under_writes() {
    let store = Arc::new(ChecklistStore::seeded());

    thread::scope(|scope| {
        let writer = Arc::clone(&store);
        scope.spawn(move || {
            for round in 0..100 {
                let status = if round % 2 == 0 {
                    ChecklistItemStatus::Passed
                } else {
                    ChecklistItemStatus::Pending
                };
                for item in [101, 102, 103] {
                    writer.update_item_status(ISO, ItemId(item), status, None).unwrap();
                }
            }
        });
        let reader = Arc::clone(&store);
        scope.spawn(move || {
            for _ in 0..200 {
                let progress = reader.get_progress(ISO).unwrap();
                assert_eq!(progress.total_items, 9);
                assert!(progress.passed_items <= 3);
                let expected = attest_store::completion_percentage(
                    progress.passed_items,
                    progress.total_items,
                );
                assert!((progress.completion_percentage - expected).abs() < f64::EPSILON);
            }
        });
    });
}
