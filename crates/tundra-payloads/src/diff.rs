//! History values diff formatting
//!
//! The history subsystem records every change as a values diff: a JSON
//! object keyed by field name. Raw entries are `[old, new]` pairs, except
//! for two attachment-shaped fields that are copied through untouched and
//! the per-role points field, which nests a pair under each role name.
//!
//! Outbound payloads expose the diff as `{"from": ..., "to": ...}` objects
//! instead of bare pairs. This module performs that reshaping and enforces
//! the structural contract along the way: a malformed entry is an upstream
//! bug and turns into a typed error, never into a silently dropped field.

use serde_json::{json, Map, Value};

use crate::errors::{PayloadError, Result};

/// Fields copied through without reshaping
const PASSTHROUGH_FIELDS: [&str; 2] = ["attachments", "custom_attributes"];

/// Field whose value nests one change pair per role
const POINTS_FIELD: &str = "points";

/// Reshape a raw values diff into its payload form
///
/// Every input field appears in the output under the same key, reshaped
/// according to its kind. Nothing is dropped and nothing is added.
///
/// # Errors
/// Returns a `PayloadError` when a non-exempt entry is not a two-element
/// pair or the points entry is not an object of per-role pairs.
pub fn format_values_diff(values_diff: &Map<String, Value>) -> Result<Map<String, Value>> {
    let mut formatted = Map::new();
    for (field, change) in values_diff {
        let reshaped = if PASSTHROUGH_FIELDS.contains(&field.as_str()) {
            change.clone()
        } else if field == POINTS_FIELD {
            format_points_diff(change)?
        } else {
            let (old, new) =
                split_change_pair(change).ok_or_else(|| PayloadError::DiffEntryNotAPair {
                    field: field.clone(),
                    found: describe(change),
                })?;
            json!({ "from": old, "to": new })
        };
        formatted.insert(field.clone(), reshaped);
    }
    tracing::debug!(fields = formatted.len(), "formatted values diff");
    Ok(formatted)
}

/// Reshape the per-role points entry
fn format_points_diff(change: &Value) -> Result<Value> {
    let roles = change
        .as_object()
        .ok_or_else(|| PayloadError::PointsDiffNotAnObject {
            found: describe(change),
        })?;

    let mut formatted = Map::new();
    for (role, pair) in roles {
        let (old, new) =
            split_change_pair(pair).ok_or_else(|| PayloadError::PointsEntryNotAPair {
                role: role.clone(),
                found: describe(pair),
            })?;
        formatted.insert(role.clone(), json!({ "from": old, "to": new }));
    }
    Ok(Value::Object(formatted))
}

/// Split a `[old, new]` change pair, rejecting any other shape
fn split_change_pair(change: &Value) -> Option<(&Value, &Value)> {
    match change.as_array() {
        Some(pair) if pair.len() == 2 => Some((&pair[0], &pair[1])),
        _ => None,
    }
}

/// Short human description of a JSON value for error messages
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "a boolean".to_string(),
        Value::Number(_) => "a number".to_string(),
        Value::String(_) => "a string".to_string(),
        Value::Array(items) => format!("an array of {} elements", items.len()),
        Value::Object(_) => "an object".to_string(),
    }
}
