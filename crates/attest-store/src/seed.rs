//! Built-in dataset loaded at startup.

use attest_core::entities::{Checklist, ChecklistItem};
use attest_core::ids::{ChecklistId, ItemId};

/// Identity of the built-in ISO 27001 checklist.
pub const ISO_27001_ID: ChecklistId = ChecklistId(1);

/// Every checklist the store starts with, in ascending id order.
#[must_use]
pub fn default_checklists() -> Vec<Checklist> {
    vec![iso_27001()]
}

/// "ISO 27001 Essential Controls": nine controls across three categories,
/// all pending with no evidence.
#[must_use]
pub fn iso_27001() -> Checklist {
    let items = [
        (101, "Access Control", "Password policy exists", [
            "Link to current password standard",
            "Evidence of executive approval",
        ]),
        (102, "Access Control", "User access reviews quarterly", [
            "Q1-Q4 review tracker",
            "Manager attestations",
        ]),
        (103, "Access Control", "Admin access logged", [
            "SIEM search export",
            "Sample privileged session",
        ]),
        (201, "Incident Management", "Incident response plan documented", [
            "Latest IR plan PDF",
            "Approval meeting notes",
        ]),
        (202, "Incident Management", "Incident log maintained", [
            "Incident register",
            "Ticket references",
        ]),
        (203, "Incident Management", "Recovery procedures tested", [
            "Test schedule",
            "Post-test report",
        ]),
        (301, "Data Protection", "Backup policy defined", [
            "Backup policy doc",
            "Version history",
        ]),
        (302, "Data Protection", "Encryption standards documented", [
            "Crypto standard",
            "KMS evidence",
        ]),
        (303, "Data Protection", "Data retention policy exists", [
            "Retention matrix",
            "Automation evidence",
        ]),
    ]
    .into_iter()
    .map(|(id, category, requirement, hints)| {
        ChecklistItem::new(
            ItemId(id),
            category,
            requirement,
            hints.into_iter().map(String::from).collect(),
        )
    })
    .collect();

    Checklist::new(ISO_27001_ID, "ISO 27001 Essential Controls", items)
}
