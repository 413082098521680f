use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::attributes::CustomAttributeValues;
use crate::milestone::Milestone;
use crate::project::Project;
use crate::user::User;

/// A project-defined workflow state for user stories
///
/// Story statuses are the only kind with an archive flag; archived statuses
/// are hidden from the kanban by default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStoryStatus {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub color: String,
    pub is_closed: bool,
    pub is_archived: bool,
}

/// One role's estimate of a user story
///
/// Estimation is per role (UX, back, front, ...). The points name is the
/// scale label ("1/2", "8", "?") and the value its numeric equivalent, with
/// None for the unestimated "?" label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RolePoints {
    /// Name of the estimating role
    pub role_name: String,

    /// Scale label of the chosen estimate
    pub points_name: String,

    /// Numeric value of the estimate, None when unestimated
    pub points_value: Option<f64>,
}

impl RolePoints {
    pub fn new(
        role_name: impl Into<String>,
        points_name: impl Into<String>,
        points_value: Option<f64>,
    ) -> Self {
        Self {
            role_name: role_name.into(),
            points_name: points_name.into(),
            points_value,
        }
    }
}

/// UserStory - the central backlog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStory {
    /// Storage identifier
    pub id: i64,

    /// Per-project sequential number, the "#42" users see
    pub reference: i64,

    /// Whether the current status counts as closed
    pub is_closed: bool,

    /// Timestamp when the story was created
    pub created_date: DateTime<Utc>,

    /// Timestamp when the story was last modified
    pub modified_date: DateTime<Utc>,

    /// Timestamp when the story reached a closed status
    pub finish_date: Option<DateTime<Utc>>,

    /// One-line summary
    pub subject: String,

    /// Flagged as required by the client
    pub client_requirement: bool,

    /// Flagged as required by the team
    pub team_requirement: bool,

    /// Id of the issue this story was promoted from, if any
    pub generated_from_issue_id: Option<i64>,

    /// Reference into an external system, as (source, id) fragments
    pub external_reference: Option<Vec<String>>,

    /// Opaque payload attached by the tribe integration
    pub tribe_gig: Option<Value>,

    /// Ids of the users watching the story
    pub watchers: Vec<i64>,

    /// Whether the story is blocked
    pub is_blocked: bool,

    /// Reason for the block (empty when not blocked)
    pub blocked_note: String,

    /// Plain tag names
    pub tags: Vec<String>,

    /// Per-role estimates
    pub points: Vec<RolePoints>,

    /// Current workflow state
    pub status: UserStoryStatus,

    /// Sprint the story is scheduled in, if any
    pub milestone: Option<Milestone>,

    /// Owning project
    pub project: Project,

    /// User who created the story
    pub owner: Option<User>,

    /// User currently assigned
    pub assigned_to: Option<User>,

    /// Lazily created custom attribute values row
    pub custom_attributes: Option<CustomAttributeValues>,
}

impl UserStory {
    /// Create an open, unscheduled story with creation-time timestamps
    pub fn new(
        id: i64,
        reference: i64,
        subject: impl Into<String>,
        status: UserStoryStatus,
        project: Project,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            reference,
            is_closed: false,
            created_date: now,
            modified_date: now,
            finish_date: None,
            subject: subject.into(),
            client_requirement: false,
            team_requirement: false,
            generated_from_issue_id: None,
            external_reference: None,
            tribe_gig: None,
            watchers: Vec::new(),
            is_blocked: false,
            blocked_note: String::new(),
            tags: Vec::new(),
            points: Vec::new(),
            status,
            milestone: None,
            project,
            owner: None,
            assigned_to: None,
            custom_attributes: None,
        }
    }

    /// Sum of the numeric role estimates
    ///
    /// None when no role carries a numeric value, so a fully unestimated
    /// story is distinguishable from one estimated at zero.
    pub fn total_points(&self) -> Option<f64> {
        let mut total = 0.0;
        let mut estimated = false;
        for role_points in &self.points {
            if let Some(value) = role_points.points_value {
                total += value;
                estimated = true;
            }
        }
        estimated.then_some(total)
    }
}
