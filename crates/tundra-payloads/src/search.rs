//! Search result payload records
//!
//! Search responses stay deliberately thin: enough to render a result row
//! and link into the detail view, with relations flattened to ids. The
//! result list can be long, so nothing nested rides along.

use serde::Serialize;
use tundra_model::{Issue, Task, UserStory, WikiPage};

/// Issue row in a search response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueSearchResultPayload {
    pub id: i64,
    #[serde(rename = "ref")]
    pub reference: i64,
    pub subject: String,
    pub status: i64,
    pub assigned_to: Option<i64>,
}

impl IssueSearchResultPayload {
    pub fn build(issue: &Issue) -> Self {
        Self {
            id: issue.id,
            reference: issue.reference,
            subject: issue.subject.clone(),
            status: issue.status.id,
            assigned_to: issue.assigned_to.as_ref().map(|user| user.id),
        }
    }
}

/// Task row in a search response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskSearchResultPayload {
    pub id: i64,
    #[serde(rename = "ref")]
    pub reference: i64,
    pub subject: String,
    pub status: i64,
    pub assigned_to: Option<i64>,
}

impl TaskSearchResultPayload {
    pub fn build(task: &Task) -> Self {
        Self {
            id: task.id,
            reference: task.reference,
            subject: task.subject.clone(),
            status: task.status.id,
            assigned_to: task.assigned_to.as_ref().map(|user| user.id),
        }
    }
}

/// User story row in a search response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStorySearchResultPayload {
    pub id: i64,
    #[serde(rename = "ref")]
    pub reference: i64,
    pub subject: String,
    pub status: i64,
    pub total_points: Option<f64>,
    pub milestone_name: Option<String>,
    pub milestone_slug: Option<String>,
}

impl UserStorySearchResultPayload {
    pub fn build(story: &UserStory) -> Self {
        Self {
            id: story.id,
            reference: story.reference,
            subject: story.subject.clone(),
            status: story.status.id,
            total_points: story.total_points(),
            milestone_name: story
                .milestone
                .as_ref()
                .map(|milestone| milestone.name.clone()),
            milestone_slug: story
                .milestone
                .as_ref()
                .map(|milestone| milestone.slug.clone()),
        }
    }
}

/// Wiki page row in a search response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WikiPageSearchResultPayload {
    pub id: i64,
    pub slug: String,
}

impl WikiPageSearchResultPayload {
    pub fn build(page: &WikiPage) -> Self {
        Self {
            id: page.id,
            slug: page.slug.clone(),
        }
    }
}
