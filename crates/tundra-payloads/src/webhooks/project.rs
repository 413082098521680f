use serde::Serialize;
use tundra_model::Project;

use crate::front::FrontUrls;

/// Project as embedded in webhook payloads
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectPayload {
    pub id: i64,
    pub permalink: String,
    pub name: String,
    pub logo_big_url: Option<String>,
}

impl ProjectPayload {
    /// Build the payload for a project snapshot
    pub fn build(project: &Project, urls: &FrontUrls) -> Self {
        Self {
            id: project.id,
            permalink: urls.project(&project.slug),
            name: project.name.clone(),
            logo_big_url: project.logo_big_url.clone(),
        }
    }
}
