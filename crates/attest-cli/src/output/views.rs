use attest_core::entities::{Checklist, ChecklistItem};
use attest_core::responses::ProgressSummary;
use attest_store::completion_percentage;

use super::{Table, TableView};

const ITEM_HEADERS: [&str; 5] = ["id", "category", "requirement", "status", "evidence"];

fn item_row(item: &ChecklistItem) -> Vec<String> {
    vec![
        item.id.to_string(),
        item.category.clone(),
        item.requirement.clone(),
        item.status.to_string(),
        if item.evidence.is_empty() {
            String::from("-")
        } else {
            item.evidence.join(", ")
        },
    ]
}

fn percent(value: f64) -> String {
    format!("{value:.1}%")
}

impl TableView for Vec<Checklist> {
    fn table(&self) -> Table {
        let mut table = Table::new(vec!["id", "name", "items", "passed", "completion"]);
        for checklist in self {
            let total = checklist.items.len() as u64;
            let passed = checklist
                .items
                .iter()
                .filter(|item| item.status.is_complete())
                .count() as u64;
            table.push(vec![
                checklist.id.to_string(),
                checklist.name.clone(),
                total.to_string(),
                passed.to_string(),
                percent(completion_percentage(passed, total)),
            ]);
        }
        table
    }
}

impl TableView for Checklist {
    fn table(&self) -> Table {
        let mut table = Table::new(ITEM_HEADERS.to_vec()).titled(format!("#{} {}", self.id, self.name));
        for item in &self.items {
            table.push(item_row(item));
        }
        table
    }
}

impl TableView for ChecklistItem {
    fn table(&self) -> Table {
        let mut table = Table::new(ITEM_HEADERS.to_vec());
        table.push(item_row(self));
        table
    }
}

impl TableView for ProgressSummary {
    fn table(&self) -> Table {
        let mut table = Table::new(vec!["checklist", "name", "passed", "total", "completion"]);
        table.push(vec![
            self.checklist_id.to_string(),
            self.name.clone(),
            self.passed_items.to_string(),
            self.total_items.to_string(),
            percent(self.completion_percentage),
        ]);
        table
    }
}
