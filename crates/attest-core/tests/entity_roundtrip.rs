//! Serde roundtrip and JsonSchema validation tests for wire types.

use attest_core::entities::*;
use attest_core::enums::*;
use attest_core::ids::*;
use attest_core::requests::*;
use attest_core::responses::*;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample_item(id: i64, status: ChecklistItemStatus) -> ChecklistItem {
    ChecklistItem {
        id: ItemId(id),
        category: "Incident Management".into(),
        requirement: "Incident log maintained".into(),
        hints: vec!["Incident register".into(), "Ticket references".into()],
        status,
        evidence: vec!["register-2024.xlsx".into()],
    }
}

roundtrip_and_validate!(
    checklist_roundtrip,
    Checklist,
    Checklist {
        id: ChecklistId(1),
        name: "ISO 27001 Essential Controls".into(),
        items: vec![
            sample_item(201, ChecklistItemStatus::Passed),
            sample_item(202, ChecklistItemStatus::NotApplicable),
        ],
    }
);

roundtrip_and_validate!(
    empty_checklist_roundtrip,
    Checklist,
    Checklist::new(ChecklistId(2), "Empty", Vec::new())
);

roundtrip_and_validate!(
    checklist_item_roundtrip,
    ChecklistItem,
    sample_item(202, ChecklistItemStatus::Failed)
);

roundtrip_and_validate!(
    update_request_roundtrip,
    UpdateItemStatusRequest,
    UpdateItemStatusRequest::new(ChecklistItemStatus::Passed, Some(vec!["doc.pdf".into()]))
);

roundtrip_and_validate!(
    progress_roundtrip,
    ProgressSummary,
    ProgressSummary {
        checklist_id: ChecklistId(1),
        name: "ISO 27001 Essential Controls".into(),
        total_items: 9,
        passed_items: 3,
        completion_percentage: 100.0 / 3.0,
    }
);

roundtrip_and_validate!(
    health_roundtrip,
    HealthResponse,
    HealthResponse {
        status: "ok".into(),
        service: "attest".into(),
        version: "0.1.0".into(),
        started_at: "2024-01-01T00:00:00+00:00".into(),
    }
);

roundtrip_and_validate!(
    error_response_roundtrip,
    ErrorResponse,
    ErrorResponse::new("not_found", "Checklist not found")
);

#[test]
fn progress_uses_camel_case_field_names() {
    let value = serde_json::to_value(ProgressSummary {
        checklist_id: ChecklistId(1),
        name: "n".into(),
        total_items: 9,
        passed_items: 0,
        completion_percentage: 0.0,
    })
    .unwrap();
    for key in [
        "checklistId",
        "name",
        "totalItems",
        "passedItems",
        "completionPercentage",
    ] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }
}

#[test]
fn checklist_schema_rejects_unknown_status() {
    let schema = serde_json::to_value(schema_for!(ChecklistItem)).unwrap();
    let instance = serde_json::json!({
        "id": 1,
        "category": "c",
        "requirement": "r",
        "hints": [],
        "status": "DONE",
        "evidence": []
    });
    assert!(!validate_against_schema(&schema, &instance).is_empty());
}
