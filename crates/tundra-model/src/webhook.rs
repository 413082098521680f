use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A project's outbound notification endpoint
///
/// The snapshot carries the delivery log so the admin payload can report a
/// count without another round trip to storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Webhook {
    /// Storage identifier
    pub id: i64,

    /// Owning project id
    pub project_id: i64,

    /// Admin-chosen display name
    pub name: String,

    /// Endpoint the payloads are posted to
    pub url: String,

    /// Shared secret used to sign deliveries
    pub key: String,

    /// Past deliveries, newest last
    pub logs: Vec<WebhookLog>,
}

impl Webhook {
    pub fn new(
        id: i64,
        project_id: i64,
        name: impl Into<String>,
        url: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            id,
            project_id,
            name: name.into(),
            url: url.into(),
            key: key.into(),
            logs: Vec::new(),
        }
    }
}

/// The record of one delivery attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookLog {
    /// Storage identifier
    pub id: i64,

    /// Webhook this delivery belonged to
    pub webhook_id: i64,

    /// Endpoint the payload was posted to
    pub url: String,

    /// HTTP status of the response (0 when the request never completed)
    pub status: i32,

    /// Payload that was sent
    pub request_data: Value,

    /// Headers that were sent
    pub request_headers: Map<String, Value>,

    /// Raw response body
    pub response_data: String,

    /// Headers of the response
    pub response_headers: Map<String, Value>,

    /// Round-trip time in seconds
    pub duration: f64,

    /// Timestamp of the attempt
    pub created: DateTime<Utc>,
}
