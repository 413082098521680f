use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::project::Project;
use crate::user::User;

/// A sprint within a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// Storage identifier
    pub id: i64,

    /// Display name
    pub name: String,

    /// URL slug, unique within the project
    pub slug: String,

    /// Planned first day of the sprint
    pub estimated_start: NaiveDate,

    /// Planned last day of the sprint
    pub estimated_finish: NaiveDate,

    /// Timestamp when the milestone was created
    pub created_date: DateTime<Utc>,

    /// Timestamp when the milestone was last modified
    pub modified_date: DateTime<Utc>,

    /// Whether the sprint has been closed
    pub closed: bool,

    /// Team availability in hours, if tracked
    pub disponibility: Option<f64>,

    /// Owning project
    pub project: Project,

    /// User who created the milestone
    pub owner: Option<User>,
}

impl Milestone {
    /// Create an open milestone with creation-time timestamps
    pub fn new(
        id: i64,
        name: impl Into<String>,
        slug: impl Into<String>,
        estimated_start: NaiveDate,
        estimated_finish: NaiveDate,
        project: Project,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            slug: slug.into(),
            estimated_start,
            estimated_finish,
            created_date: now,
            modified_date: now,
            closed: false,
            disponibility: None,
            project,
            owner: None,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}
