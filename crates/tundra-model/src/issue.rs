use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::attributes::CustomAttributeValues;
use crate::milestone::Milestone;
use crate::project::Project;
use crate::user::User;

/// A project-defined workflow state for issues
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueStatus {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub color: String,
    pub is_closed: bool,
}

/// Project-defined classification (bug, question, enhancement)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueType {
    pub id: i64,
    pub name: String,
    pub color: String,
}

/// Project-defined urgency scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Priority {
    pub id: i64,
    pub name: String,
    pub color: String,
}

/// Project-defined impact scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Severity {
    pub id: i64,
    pub name: String,
    pub color: String,
}

/// A reported problem or request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Storage identifier
    pub id: i64,

    /// Per-project sequential number
    pub reference: i64,

    /// Timestamp when the issue was created
    pub created_date: DateTime<Utc>,

    /// Timestamp when the issue was last modified
    pub modified_date: DateTime<Utc>,

    /// Timestamp when the issue reached a closed status
    pub finished_date: Option<DateTime<Utc>>,

    /// One-line summary
    pub subject: String,

    /// Reference into an external system, as (source, id) fragments
    pub external_reference: Option<Vec<String>>,

    /// Ids of the users watching the issue
    pub watchers: Vec<i64>,

    /// Long-form description
    pub description: String,

    /// Plain tag names
    pub tags: Vec<String>,

    /// Owning project
    pub project: Project,

    /// Sprint the issue is scheduled in, if any
    pub milestone: Option<Milestone>,

    /// User who reported the issue
    pub owner: Option<User>,

    /// User currently assigned
    pub assigned_to: Option<User>,

    /// Current workflow state
    pub status: IssueStatus,

    /// Classification
    pub issue_type: IssueType,

    /// Urgency
    pub priority: Priority,

    /// Impact
    pub severity: Severity,

    /// Lazily created custom attribute values row
    pub custom_attributes: Option<CustomAttributeValues>,
}

impl Issue {
    /// Create an open issue with creation-time timestamps
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        reference: i64,
        subject: impl Into<String>,
        status: IssueStatus,
        issue_type: IssueType,
        priority: Priority,
        severity: Severity,
        project: Project,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            reference,
            created_date: now,
            modified_date: now,
            finished_date: None,
            subject: subject.into(),
            external_reference: None,
            watchers: Vec::new(),
            description: String::new(),
            tags: Vec::new(),
            project,
            milestone: None,
            owner: None,
            assigned_to: None,
            status,
            issue_type,
            priority,
            severity,
            custom_attributes: None,
        }
    }
}
