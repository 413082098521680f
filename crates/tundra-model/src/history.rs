use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One change event recorded against a tracked object
///
/// The history subsystem snapshots every change as a comment plus a values
/// diff: a JSON object keyed by field name whose entries describe what the
/// change did to that field. The payload layer reshapes the diff but never
/// produces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Raw markdown comment attached to the change (may be empty)
    pub comment: String,

    /// Rendered HTML of the comment
    pub comment_html: String,

    /// Timestamp the comment was deleted, if it was
    pub delete_comment_date: Option<DateTime<Utc>>,

    /// Prior comment revisions, as recorded by the edit trail
    pub comment_versions: Option<Value>,

    /// Timestamp the comment was last edited, if it was
    pub edit_comment_date: Option<DateTime<Utc>>,

    /// Field-keyed change document, `field -> [old, new]` with a handful of
    /// field-specific shapes
    pub values_diff: Map<String, Value>,
}

impl HistoryEntry {
    /// Create an uncommented entry around a values diff
    pub fn new(values_diff: Map<String, Value>) -> Self {
        Self {
            comment: String::new(),
            comment_html: String::new(),
            delete_comment_date: None,
            comment_versions: None,
            edit_comment_date: None,
            values_diff,
        }
    }
}
