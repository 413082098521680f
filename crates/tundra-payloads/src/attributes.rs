//! Custom attribute resolution
//!
//! Objects store their custom attribute values as one JSON document keyed by
//! the string-encoded definition id. Payloads expose them keyed by the
//! admin-chosen attribute name instead. Resolution walks the project's
//! definitions for the object's kind and picks the values that exist.
//!
//! Two absences mean different things and stay distinguishable: an object
//! without a values row resolves to `None` (rendered as JSON null), while a
//! row that matches no definition resolves to an empty map.

use serde_json::{Map, Value};
use tundra_model::{CustomAttributeDef, CustomAttributeValues};

/// Resolve a values document against the definitions of its kind
///
/// Walks `schema` in order and emits `name -> value` for every definition
/// whose value is present and non-null. A stored JSON null is treated the
/// same as an absent key: the attribute is omitted rather than emitted as a
/// null placeholder.
pub fn resolve_custom_attributes(
    schema: &[CustomAttributeDef],
    values: Option<&CustomAttributeValues>,
) -> Option<Map<String, Value>> {
    let values = match values {
        Some(values) => values,
        None => {
            tracing::debug!("object has no custom attribute values row");
            return None;
        }
    };

    let mut resolved = Map::new();
    for def in schema {
        if let Some(value) = values.get(def.id) {
            if !value.is_null() {
                resolved.insert(def.name.clone(), value.clone());
            }
        }
    }
    Some(resolved)
}
