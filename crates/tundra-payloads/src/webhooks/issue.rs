use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use tundra_model::{Issue, IssueStatus, IssueType, Priority, Severity};

use crate::attributes::resolve_custom_attributes;
use crate::avatar::AvatarSource;
use crate::front::FrontUrls;
use crate::webhooks::milestone::MilestonePayload;
use crate::webhooks::project::ProjectPayload;
use crate::webhooks::user::UserPayload;

/// Issue status as embedded in webhook payloads
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueStatusPayload {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub color: String,
    pub is_closed: bool,
}

impl IssueStatusPayload {
    pub fn build(status: &IssueStatus) -> Self {
        Self {
            id: status.id,
            name: status.name.clone(),
            slug: status.slug.clone(),
            color: status.color.clone(),
            is_closed: status.is_closed,
        }
    }
}

/// Issue classification as embedded in webhook payloads
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueTypePayload {
    pub id: i64,
    pub name: String,
    pub color: String,
}

impl IssueTypePayload {
    pub fn build(issue_type: &IssueType) -> Self {
        Self {
            id: issue_type.id,
            name: issue_type.name.clone(),
            color: issue_type.color.clone(),
        }
    }
}

/// Issue priority as embedded in webhook payloads
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriorityPayload {
    pub id: i64,
    pub name: String,
    pub color: String,
}

impl PriorityPayload {
    pub fn build(priority: &Priority) -> Self {
        Self {
            id: priority.id,
            name: priority.name.clone(),
            color: priority.color.clone(),
        }
    }
}

/// Issue severity as embedded in webhook payloads
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeverityPayload {
    pub id: i64,
    pub name: String,
    pub color: String,
}

impl SeverityPayload {
    pub fn build(severity: &Severity) -> Self {
        Self {
            id: severity.id,
            name: severity.name.clone(),
            color: severity.color.clone(),
        }
    }
}

/// Issue as carried by webhook payloads
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssuePayload {
    pub id: i64,
    #[serde(rename = "ref")]
    pub reference: i64,
    pub created_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
    pub finished_date: Option<DateTime<Utc>>,
    pub subject: String,
    pub external_reference: Option<Vec<String>>,
    pub watchers: Vec<i64>,
    pub description: String,
    pub tags: Vec<String>,
    pub permalink: String,
    pub project: ProjectPayload,
    pub milestone: Option<MilestonePayload>,
    pub owner: Option<UserPayload>,
    pub assigned_to: Option<UserPayload>,
    pub status: IssueStatusPayload,
    #[serde(rename = "type")]
    pub issue_type: IssueTypePayload,
    pub priority: PriorityPayload,
    pub severity: SeverityPayload,
    pub custom_attributes_values: Option<Map<String, Value>>,
}

impl IssuePayload {
    /// Build the payload for an issue snapshot
    pub fn build(issue: &Issue, urls: &FrontUrls, avatars: &dyn AvatarSource) -> Self {
        Self {
            id: issue.id,
            reference: issue.reference,
            created_date: issue.created_date,
            modified_date: issue.modified_date,
            finished_date: issue.finished_date,
            subject: issue.subject.clone(),
            external_reference: issue.external_reference.clone(),
            watchers: issue.watchers.clone(),
            description: issue.description.clone(),
            tags: issue.tags.clone(),
            permalink: urls.issue(&issue.project.slug, issue.reference),
            project: ProjectPayload::build(&issue.project, urls),
            milestone: MilestonePayload::build_opt(issue.milestone.as_ref(), urls, avatars),
            owner: UserPayload::build_opt(issue.owner.as_ref(), urls, avatars),
            assigned_to: UserPayload::build_opt(issue.assigned_to.as_ref(), urls, avatars),
            status: IssueStatusPayload::build(&issue.status),
            issue_type: IssueTypePayload::build(&issue.issue_type),
            priority: PriorityPayload::build(&issue.priority),
            severity: SeverityPayload::build(&issue.severity),
            custom_attributes_values: resolve_custom_attributes(
                &issue.project.issue_attributes,
                issue.custom_attributes.as_ref(),
            ),
        }
    }
}
