use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use tundra_model::{Webhook, WebhookLog};

/// Webhook as listed by the administration API
///
/// The shared secret is included: the listing is only visible to project
/// admins, who need the key to verify signatures on their side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookPayload {
    pub id: i64,
    pub project: i64,
    pub name: String,
    pub url: String,
    pub key: String,
    pub logs_counter: usize,
}

impl WebhookPayload {
    /// Build the payload for a webhook snapshot
    pub fn build(webhook: &Webhook) -> Self {
        Self {
            id: webhook.id,
            project: webhook.project_id,
            name: webhook.name.clone(),
            url: webhook.url.clone(),
            key: webhook.key.clone(),
            logs_counter: webhook.logs.len(),
        }
    }
}

/// One delivery attempt as listed by the administration API
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookLogPayload {
    pub id: i64,
    pub webhook: i64,
    pub url: String,
    pub status: i32,
    pub request_data: Value,
    pub request_headers: Map<String, Value>,
    pub response_data: String,
    pub response_headers: Map<String, Value>,
    pub duration: f64,
    pub created: DateTime<Utc>,
}

impl WebhookLogPayload {
    /// Build the payload for a delivery log entry
    pub fn build(log: &WebhookLog) -> Self {
        Self {
            id: log.id,
            webhook: log.webhook_id,
            url: log.url.clone(),
            status: log.status,
            request_data: log.request_data.clone(),
            request_headers: log.request_headers.clone(),
            response_data: log.response_data.clone(),
            response_headers: log.response_headers.clone(),
            duration: log.duration,
            created: log.created,
        }
    }
}
