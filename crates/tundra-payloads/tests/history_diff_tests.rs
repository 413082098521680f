//! Values diff formatting tests.
//!
//! All tests operate on raw JSON diff documents, the shape the history
//! subsystem hands over (no snapshots, no payload assembly).

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use serde_json::{json, Map, Value};
use tundra_payloads::diff::format_values_diff;
use tundra_payloads::errors::PayloadError;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build a diff document from a `json!` object literal.
fn diff_of(entries: Value) -> Map<String, Value> {
    entries.as_object().cloned().unwrap()
}

// ---------------------------------------------------------------------------
// Plain entries
// ---------------------------------------------------------------------------

#[test]
fn test_plain_entries_become_from_to_objects() {
    let diff = diff_of(json!({
        "subject": ["Old subject", "New subject"],
        "is_blocked": [false, true],
        "assigned_to": [null, 7]
    }));

    let formatted = format_values_diff(&diff).unwrap();

    assert_eq!(
        serde_json::to_value(&formatted).unwrap(),
        json!({
            "subject": { "from": "Old subject", "to": "New subject" },
            "is_blocked": { "from": false, "to": true },
            "assigned_to": { "from": null, "to": 7 }
        })
    );
}

#[test]
fn test_pair_elements_keep_their_positions() {
    let diff = diff_of(json!({ "status": ["New", "In progress"] }));

    let formatted = format_values_diff(&diff).unwrap();

    assert_eq!(formatted["status"]["from"], json!("New"));
    assert_eq!(formatted["status"]["to"], json!("In progress"));
}

#[test]
fn test_pair_values_may_be_structured() {
    let diff = diff_of(json!({
        "tags": [["ux"], ["ux", "onboarding"]]
    }));

    let formatted = format_values_diff(&diff).unwrap();

    assert_eq!(
        formatted["tags"],
        json!({ "from": ["ux"], "to": ["ux", "onboarding"] })
    );
}

// ---------------------------------------------------------------------------
// Exempt entries
// ---------------------------------------------------------------------------

#[test]
fn test_attachments_pass_through_untouched() {
    let blob = json!({
        "new": [{ "id": 9, "filename": "sprint-notes.pdf", "url": "https://media.example.com/9" }],
        "changed": [],
        "deleted": []
    });
    let diff = diff_of(json!({ "attachments": blob.clone() }));

    let formatted = format_values_diff(&diff).unwrap();

    assert_eq!(formatted["attachments"], blob);
}

#[test]
fn test_custom_attributes_pass_through_untouched() {
    let blob = json!([
        { "name": "Branch", "changes": { "anything": [1, 2, 3] } }
    ]);
    let diff = diff_of(json!({ "custom_attributes": blob.clone() }));

    let formatted = format_values_diff(&diff).unwrap();

    assert_eq!(formatted["custom_attributes"], blob);
}

#[test]
fn test_exempt_entries_skip_the_pair_check() {
    // Would be rejected as a plain entry; exempt keys take any shape.
    let diff = diff_of(json!({ "attachments": "free-form" }));

    let formatted = format_values_diff(&diff).unwrap();

    assert_eq!(formatted["attachments"], json!("free-form"));
}

// ---------------------------------------------------------------------------
// Points entries
// ---------------------------------------------------------------------------

#[test]
fn test_points_nest_one_from_to_per_role() {
    let diff = diff_of(json!({
        "points": {
            "UX": ["2", "5"],
            "Back": [null, "8"],
            "Front": ["1/2", null]
        }
    }));

    let formatted = format_values_diff(&diff).unwrap();

    assert_eq!(
        formatted["points"],
        json!({
            "UX": { "from": "2", "to": "5" },
            "Back": { "from": null, "to": "8" },
            "Front": { "from": "1/2", "to": null }
        })
    );
}

#[test]
fn test_empty_points_object_stays_empty() {
    let diff = diff_of(json!({ "points": {} }));

    let formatted = format_values_diff(&diff).unwrap();

    assert_eq!(formatted["points"], json!({}));
}

// ---------------------------------------------------------------------------
// Contract violations
// ---------------------------------------------------------------------------

#[test]
fn test_short_entry_is_rejected() {
    let diff = diff_of(json!({ "subject": ["only-new"] }));

    let err = format_values_diff(&diff).unwrap_err();

    assert!(matches!(err, PayloadError::DiffEntryNotAPair { field, .. } if field == "subject"));
}

#[test]
fn test_long_entry_is_rejected() {
    let diff = diff_of(json!({ "subject": ["a", "b", "c"] }));

    let err = format_values_diff(&diff).unwrap_err();

    assert_eq!(
        err,
        PayloadError::DiffEntryNotAPair {
            field: "subject".to_string(),
            found: "an array of 3 elements".to_string(),
        }
    );
}

#[test]
fn test_scalar_entry_is_rejected() {
    let diff = diff_of(json!({ "subject": 42 }));

    let err = format_values_diff(&diff).unwrap_err();

    assert_eq!(
        err,
        PayloadError::DiffEntryNotAPair {
            field: "subject".to_string(),
            found: "a number".to_string(),
        }
    );
}

#[test]
fn test_points_as_pair_is_rejected() {
    let diff = diff_of(json!({ "points": ["2", "5"] }));

    let err = format_values_diff(&diff).unwrap_err();

    assert!(matches!(err, PayloadError::PointsDiffNotAnObject { .. }));
}

#[test]
fn test_points_role_with_wrong_arity_is_rejected() {
    let diff = diff_of(json!({ "points": { "UX": ["2", "5"], "Back": ["8"] } }));

    let err = format_values_diff(&diff).unwrap_err();

    assert!(matches!(err, PayloadError::PointsEntryNotAPair { role, .. } if role == "Back"));
}

#[test]
fn test_error_message_is_descriptive() {
    let diff = diff_of(json!({ "watchers": { "oops": true } }));

    let message = format_values_diff(&diff).unwrap_err().to_string();

    assert!(message.contains("watchers"));
    assert!(message.contains("an object"));
}

// ---------------------------------------------------------------------------
// Structural properties
// ---------------------------------------------------------------------------

/// Arbitrary JSON value small enough to keep cases readable.
fn arb_change_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-z]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

/// Well-formed diff: every entry satisfies the shape its key demands.
fn arb_well_formed_diff() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map(
        "[a-z_]{1,12}",
        (arb_change_value(), arb_change_value()),
        0..6,
    )
    .prop_map(|fields| {
        let mut diff = Map::new();
        for (field, (old, new)) in fields {
            let entry = if field == "points" {
                json!({ "UX": [old, new] })
            } else {
                json!([old, new])
            };
            diff.insert(field, entry);
        }
        diff
    })
}

proptest! {
    #[test]
    fn prop_output_keys_equal_input_keys(diff in arb_well_formed_diff()) {
        let formatted = format_values_diff(&diff).unwrap();

        let input_keys: Vec<&String> = diff.keys().collect();
        let output_keys: Vec<&String> = formatted.keys().collect();
        prop_assert_eq!(input_keys, output_keys);
    }

    #[test]
    fn prop_every_entry_is_reshaped_by_its_kind(diff in arb_well_formed_diff()) {
        let formatted = format_values_diff(&diff).unwrap();

        for (field, change) in &diff {
            let reshaped = formatted.get(field).unwrap();
            if field == "attachments" || field == "custom_attributes" {
                prop_assert_eq!(reshaped, change);
            } else if field == "points" {
                for (role, pair) in change.as_object().unwrap() {
                    let pair = pair.as_array().unwrap();
                    let expected = json!({ "from": pair[0], "to": pair[1] });
                    prop_assert_eq!(reshaped.get(role).unwrap(), &expected);
                }
            } else {
                let pair = change.as_array().unwrap();
                let expected = json!({ "from": pair[0], "to": pair[1] });
                prop_assert_eq!(reshaped, &expected);
            }
        }
    }

    #[test]
    fn prop_formatting_is_deterministic(diff in arb_well_formed_diff()) {
        let first = format_values_diff(&diff).unwrap();
        let second = format_values_diff(&diff).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn prop_wrong_arity_is_always_rejected(
        field in "[a-m_]{1,10}",
        items in prop_oneof![
            prop::collection::vec(arb_change_value(), 0..2),
            prop::collection::vec(arb_change_value(), 3..6),
        ]
    ) {
        let mut diff = Map::new();
        diff.insert(field, Value::Array(items));

        let err = format_values_diff(&diff).unwrap_err();
        let is_not_a_pair = matches!(err, PayloadError::DiffEntryNotAPair { .. });
        prop_assert!(is_not_a_pair);
    }
}
