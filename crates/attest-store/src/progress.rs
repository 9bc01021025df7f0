//! Completion progress for a checklist.

use attest_core::responses::ProgressSummary;

use crate::record::ChecklistRecord;

/// Share of passed items as a percentage in `0.0..=100.0`, unrounded.
///
/// An empty checklist is `0.0`, not `NaN`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn completion_percentage(passed: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (passed as f64 * 100.0) / total as f64
}

/// Summarize one checklist. The caller holds the checklist's lock, so both
/// counts come from the same state.
pub(crate) fn summarize(record: &ChecklistRecord) -> ProgressSummary {
    let total_items = record.items.len() as u64;
    let passed_items = record
        .items
        .iter()
        .filter(|item| item.status.is_complete())
        .count() as u64;

    ProgressSummary {
        checklist_id: record.id,
        name: record.name.clone(),
        total_items,
        passed_items,
        completion_percentage: completion_percentage(passed_items, total_items),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0, 0.0)]
    #[case(0, 9, 0.0)]
    #[case(9, 9, 100.0)]
    #[case(1, 2, 50.0)]
    #[case(1, 3, 100.0 / 3.0)]
    #[case(3, 9, 300.0 / 9.0)]
    fn percentage_cases(#[case] passed: u64, #[case] total: u64, #[case] expected: f64) {
        let actual = completion_percentage(passed, total);
        assert!((actual - expected).abs() < 1e-9, "{passed}/{total}: {actual}");
    }

    #[test]
    fn one_third_is_not_rounded() {
        let pct = completion_percentage(1, 3);
        assert!(pct > 33.333_333 && pct < 33.333_334);
    }
}
