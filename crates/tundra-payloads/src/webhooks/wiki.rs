use chrono::{DateTime, Utc};
use serde::Serialize;
use tundra_model::WikiPage;

use crate::avatar::AvatarSource;
use crate::front::FrontUrls;
use crate::webhooks::project::ProjectPayload;
use crate::webhooks::user::UserPayload;

/// Wiki page as carried by webhook payloads
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WikiPagePayload {
    pub id: i64,
    pub slug: String,
    pub content: String,
    pub created_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
    pub permalink: String,
    pub project: ProjectPayload,
    pub owner: Option<UserPayload>,
    pub last_modifier: Option<UserPayload>,
}

impl WikiPagePayload {
    /// Build the payload for a wiki page snapshot
    pub fn build(page: &WikiPage, urls: &FrontUrls, avatars: &dyn AvatarSource) -> Self {
        Self {
            id: page.id,
            slug: page.slug.clone(),
            content: page.content.clone(),
            created_date: page.created_date,
            modified_date: page.modified_date,
            permalink: urls.wiki(&page.project.slug, &page.slug),
            project: ProjectPayload::build(&page.project, urls),
            owner: UserPayload::build_opt(page.owner.as_ref(), urls, avatars),
            last_modifier: UserPayload::build_opt(page.last_modifier.as_ref(), urls, avatars),
        }
    }
}
