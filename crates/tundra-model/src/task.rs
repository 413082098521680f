use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::attributes::CustomAttributeValues;
use crate::milestone::Milestone;
use crate::project::Project;
use crate::story::UserStory;
use crate::user::User;

/// A project-defined workflow state for tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskStatus {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub color: String,
    pub is_closed: bool,
}

/// A unit of work, usually attached to a user story
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Storage identifier
    pub id: i64,

    /// Per-project sequential number
    pub reference: i64,

    /// Timestamp when the task was created
    pub created_date: DateTime<Utc>,

    /// Timestamp when the task was last modified
    pub modified_date: DateTime<Utc>,

    /// Timestamp when the task reached a closed status
    pub finished_date: Option<DateTime<Utc>>,

    /// One-line summary
    pub subject: String,

    /// Position within the parent story's task list
    pub us_order: i64,

    /// Position within the sprint taskboard column
    pub taskboard_order: i64,

    /// Marked as unpleasant work nobody wants to take
    pub is_iocaine: bool,

    /// Reference into an external system, as (source, id) fragments
    pub external_reference: Option<Vec<String>>,

    /// Ids of the users watching the task
    pub watchers: Vec<i64>,

    /// Whether the task is blocked
    pub is_blocked: bool,

    /// Reason for the block (empty when not blocked)
    pub blocked_note: String,

    /// Long-form description
    pub description: String,

    /// Plain tag names
    pub tags: Vec<String>,

    /// Owning project
    pub project: Project,

    /// User who created the task
    pub owner: Option<User>,

    /// User currently assigned
    pub assigned_to: Option<User>,

    /// Current workflow state
    pub status: TaskStatus,

    /// Parent user story, if the task is attached to one
    pub user_story: Option<UserStory>,

    /// Sprint the task is scheduled in, if any
    pub milestone: Option<Milestone>,

    /// Lazily created custom attribute values row
    pub custom_attributes: Option<CustomAttributeValues>,
}

impl Task {
    /// Create an open, unattached task with creation-time timestamps
    pub fn new(
        id: i64,
        reference: i64,
        subject: impl Into<String>,
        status: TaskStatus,
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
            us_order: 0,
            taskboard_order: 0,
            is_iocaine: false,
            external_reference: None,
            watchers: Vec::new(),
            is_blocked: false,
            blocked_note: String::new(),
            description: String::new(),
            tags: Vec::new(),
            project,
            owner: None,
            assigned_to: None,
            status,
            user_story: None,
            milestone: None,
            custom_attributes: None,
        }
    }
}
