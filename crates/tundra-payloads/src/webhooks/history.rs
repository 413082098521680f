use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use tundra_model::HistoryEntry;

use crate::diff::format_values_diff;
use crate::errors::Result;

/// Change event as carried by webhook payloads
///
/// Rides along with every "change" delivery: the comment trail plus the
/// values diff reshaped into from/to form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntryPayload {
    pub comment: String,
    pub comment_html: String,
    pub delete_comment_date: Option<DateTime<Utc>>,
    pub comment_versions: Option<Value>,
    pub edit_comment_date: Option<DateTime<Utc>>,
    pub diff: Map<String, Value>,
}

impl HistoryEntryPayload {
    /// Build the payload for a history entry
    ///
    /// # Errors
    /// Returns a `PayloadError` when the entry's values diff violates the
    /// structural contract of the history subsystem.
    pub fn build(entry: &HistoryEntry) -> Result<Self> {
        Ok(Self {
            comment: entry.comment.clone(),
            comment_html: entry.comment_html.clone(),
            delete_comment_date: entry.delete_comment_date,
            comment_versions: entry.comment_versions.clone(),
            edit_comment_date: entry.edit_comment_date,
            diff: format_values_diff(&entry.values_diff)?,
        })
    }
}
