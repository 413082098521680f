use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tundra_model::Milestone;

use crate::avatar::AvatarSource;
use crate::front::FrontUrls;
use crate::webhooks::project::ProjectPayload;
use crate::webhooks::user::UserPayload;

/// Milestone as embedded in webhook payloads
///
/// The permalink points at the sprint taskboard rather than a detail page;
/// that is where the front-end shows a sprint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MilestonePayload {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub estimated_start: NaiveDate,
    pub estimated_finish: NaiveDate,
    pub created_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
    pub closed: bool,
    pub disponibility: Option<f64>,
    pub permalink: String,
    pub project: ProjectPayload,
    pub owner: Option<UserPayload>,
}

impl MilestonePayload {
    /// Build the payload for a milestone snapshot
    pub fn build(milestone: &Milestone, urls: &FrontUrls, avatars: &dyn AvatarSource) -> Self {
        Self {
            id: milestone.id,
            name: milestone.name.clone(),
            slug: milestone.slug.clone(),
            estimated_start: milestone.estimated_start,
            estimated_finish: milestone.estimated_finish,
            created_date: milestone.created_date,
            modified_date: milestone.modified_date,
            closed: milestone.closed,
            disponibility: milestone.disponibility,
            permalink: urls.taskboard(&milestone.project.slug, &milestone.slug),
            project: ProjectPayload::build(&milestone.project, urls),
            owner: UserPayload::build_opt(milestone.owner.as_ref(), urls, avatars),
        }
    }

    /// Build the payload for an optional milestone reference
    pub fn build_opt(
        milestone: Option<&Milestone>,
        urls: &FrontUrls,
        avatars: &dyn AvatarSource,
    ) -> Option<Self> {
        milestone.map(|milestone| Self::build(milestone, urls, avatars))
    }
}
