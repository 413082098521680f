use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One admin-defined attribute of a project
///
/// Projects declare custom attributes per kind (user story, task, issue).
/// The definition carries the storage id that values are keyed by and the
/// name that payloads expose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomAttributeDef {
    /// Storage identifier; values reference it as a string key
    pub id: i64,

    /// Admin-chosen display name, the key used in outbound payloads
    pub name: String,
}

impl CustomAttributeDef {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// The per-object row of custom attribute values
///
/// Stored as a single JSON document keyed by the string-encoded attribute
/// definition id. The row is created lazily, so an object may have no values
/// record at all; callers model that as `Option<CustomAttributeValues>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomAttributeValues {
    /// Raw value document, `"<def id>" -> value`
    pub attributes_values: Map<String, Value>,
}

impl CustomAttributeValues {
    pub fn new(attributes_values: Map<String, Value>) -> Self {
        Self { attributes_values }
    }

    /// Look up the raw value stored for a definition id
    pub fn get(&self, def_id: i64) -> Option<&Value> {
        self.attributes_values.get(&def_id.to_string())
    }
}
