use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use tundra_model::{RolePoints, UserStory, UserStoryStatus};

use crate::attributes::resolve_custom_attributes;
use crate::avatar::AvatarSource;
use crate::front::FrontUrls;
use crate::webhooks::milestone::MilestonePayload;
use crate::webhooks::project::ProjectPayload;
use crate::webhooks::user::UserPayload;

/// User story status as embedded in webhook payloads
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStoryStatusPayload {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub color: String,
    pub is_closed: bool,
    pub is_archived: bool,
}

impl UserStoryStatusPayload {
    pub fn build(status: &UserStoryStatus) -> Self {
        Self {
            id: status.id,
            name: status.name.clone(),
            slug: status.slug.clone(),
            color: status.color.clone(),
            is_closed: status.is_closed,
            is_archived: status.is_archived,
        }
    }
}

/// One role's estimate as embedded in webhook payloads
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RolePointsPayload {
    pub role: String,
    pub name: String,
    pub value: Option<f64>,
}

impl RolePointsPayload {
    pub fn build(role_points: &RolePoints) -> Self {
        Self {
            role: role_points.role_name.clone(),
            name: role_points.points_name.clone(),
            value: role_points.points_value,
        }
    }
}

/// User story as carried by webhook payloads
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStoryPayload {
    pub id: i64,
    #[serde(rename = "ref")]
    pub reference: i64,
    pub project: ProjectPayload,
    pub is_closed: bool,
    pub created_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
    pub finish_date: Option<DateTime<Utc>>,
    pub subject: String,
    pub client_requirement: bool,
    pub team_requirement: bool,
    pub generated_from_issue: Option<i64>,
    pub external_reference: Option<Vec<String>>,
    pub tribe_gig: Option<Value>,
    pub watchers: Vec<i64>,
    pub is_blocked: bool,
    pub blocked_note: String,
    pub tags: Vec<String>,
    pub permalink: String,
    pub owner: Option<UserPayload>,
    pub assigned_to: Option<UserPayload>,
    pub points: Vec<RolePointsPayload>,
    pub status: UserStoryStatusPayload,
    pub milestone: Option<MilestonePayload>,
    pub custom_attributes_values: Option<Map<String, Value>>,
}

impl UserStoryPayload {
    /// Build the payload for a user story snapshot
    ///
    /// Custom attribute values are resolved against the project's user
    /// story definitions; a story without a values row carries JSON null.
    pub fn build(story: &UserStory, urls: &FrontUrls, avatars: &dyn AvatarSource) -> Self {
        Self {
            id: story.id,
            reference: story.reference,
            project: ProjectPayload::build(&story.project, urls),
            is_closed: story.is_closed,
            created_date: story.created_date,
            modified_date: story.modified_date,
            finish_date: story.finish_date,
            subject: story.subject.clone(),
            client_requirement: story.client_requirement,
            team_requirement: story.team_requirement,
            generated_from_issue: story.generated_from_issue_id,
            external_reference: story.external_reference.clone(),
            tribe_gig: story.tribe_gig.clone(),
            watchers: story.watchers.clone(),
            is_blocked: story.is_blocked,
            blocked_note: story.blocked_note.clone(),
            tags: story.tags.clone(),
            permalink: urls.user_story(&story.project.slug, story.reference),
            owner: UserPayload::build_opt(story.owner.as_ref(), urls, avatars),
            assigned_to: UserPayload::build_opt(story.assigned_to.as_ref(), urls, avatars),
            points: story.points.iter().map(RolePointsPayload::build).collect(),
            status: UserStoryStatusPayload::build(&story.status),
            milestone: MilestonePayload::build_opt(story.milestone.as_ref(), urls, avatars),
            custom_attributes_values: resolve_custom_attributes(
                &story.project.userstory_attributes,
                story.custom_attributes.as_ref(),
            ),
        }
    }

    /// Build the payload for an optional story reference
    pub fn build_opt(
        story: Option<&UserStory>,
        urls: &FrontUrls,
        avatars: &dyn AvatarSource,
    ) -> Option<Self> {
        story.map(|story| Self::build(story, urls, avatars))
    }
}
