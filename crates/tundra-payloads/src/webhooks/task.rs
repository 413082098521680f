use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use tundra_model::{Task, TaskStatus};

use crate::attributes::resolve_custom_attributes;
use crate::avatar::AvatarSource;
use crate::front::FrontUrls;
use crate::webhooks::milestone::MilestonePayload;
use crate::webhooks::project::ProjectPayload;
use crate::webhooks::story::UserStoryPayload;
use crate::webhooks::user::UserPayload;

/// Task status as embedded in webhook payloads
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskStatusPayload {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub color: String,
    pub is_closed: bool,
}

impl TaskStatusPayload {
    pub fn build(status: &TaskStatus) -> Self {
        Self {
            id: status.id,
            name: status.name.clone(),
            slug: status.slug.clone(),
            color: status.color.clone(),
            is_closed: status.is_closed,
        }
    }
}

/// Task as carried by webhook payloads
///
/// The parent user story rides along as a full nested payload, so webhook
/// consumers see the story context without a second request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskPayload {
    pub id: i64,
    #[serde(rename = "ref")]
    pub reference: i64,
    pub created_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
    pub finished_date: Option<DateTime<Utc>>,
    pub subject: String,
    pub us_order: i64,
    pub taskboard_order: i64,
    pub is_iocaine: bool,
    pub external_reference: Option<Vec<String>>,
    pub watchers: Vec<i64>,
    pub is_blocked: bool,
    pub blocked_note: String,
    pub description: String,
    pub tags: Vec<String>,
    pub permalink: String,
    pub project: ProjectPayload,
    pub owner: Option<UserPayload>,
    pub assigned_to: Option<UserPayload>,
    pub status: TaskStatusPayload,
    pub user_story: Option<UserStoryPayload>,
    pub milestone: Option<MilestonePayload>,
    pub custom_attributes_values: Option<Map<String, Value>>,
}

impl TaskPayload {
    /// Build the payload for a task snapshot
    pub fn build(task: &Task, urls: &FrontUrls, avatars: &dyn AvatarSource) -> Self {
        Self {
            id: task.id,
            reference: task.reference,
            created_date: task.created_date,
            modified_date: task.modified_date,
            finished_date: task.finished_date,
            subject: task.subject.clone(),
            us_order: task.us_order,
            taskboard_order: task.taskboard_order,
            is_iocaine: task.is_iocaine,
            external_reference: task.external_reference.clone(),
            watchers: task.watchers.clone(),
            is_blocked: task.is_blocked,
            blocked_note: task.blocked_note.clone(),
            description: task.description.clone(),
            tags: task.tags.clone(),
            permalink: urls.task(&task.project.slug, task.reference),
            project: ProjectPayload::build(&task.project, urls),
            owner: UserPayload::build_opt(task.owner.as_ref(), urls, avatars),
            assigned_to: UserPayload::build_opt(task.assigned_to.as_ref(), urls, avatars),
            status: TaskStatusPayload::build(&task.status),
            user_story: UserStoryPayload::build_opt(task.user_story.as_ref(), urls, avatars),
            milestone: MilestonePayload::build_opt(task.milestone.as_ref(), urls, avatars),
            custom_attributes_values: resolve_custom_attributes(
                &task.project.task_attributes,
                task.custom_attributes.as_ref(),
            ),
        }
    }
}
