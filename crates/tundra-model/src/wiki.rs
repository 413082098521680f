use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::project::Project;
use crate::user::User;

/// One page of a project wiki
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WikiPage {
    /// Storage identifier
    pub id: i64,

    /// URL slug, unique within the project
    pub slug: String,

    /// Raw markdown source
    pub content: String,

    /// Optimistic-concurrency version, bumped on every save
    pub version: i64,

    /// Timestamp when the page was created
    pub created_date: DateTime<Utc>,

    /// Timestamp when the page was last modified
    pub modified_date: DateTime<Utc>,

    /// Owning project
    pub project: Project,

    /// User who created the page
    pub owner: Option<User>,

    /// User who last saved the page
    pub last_modifier: Option<User>,
}

impl WikiPage {
    /// Create a first-version page with creation-time timestamps
    pub fn new(
        id: i64,
        slug: impl Into<String>,
        content: impl Into<String>,
        project: Project,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            slug: slug.into(),
            content: content.into(),
            version: 1,
            created_date: now,
            modified_date: now,
            project,
            owner: None,
            last_modifier: None,
        }
    }
}

/// A navigation entry in the project wiki sidebar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WikiLink {
    /// Storage identifier
    pub id: i64,

    /// Owning project id
    pub project_id: i64,

    /// Link text shown in the sidebar
    pub title: String,

    /// Slug of the page the link points at
    pub href: String,

    /// Position within the sidebar
    pub order: i64,
}

impl WikiLink {
    pub fn new(
        id: i64,
        project_id: i64,
        title: impl Into<String>,
        href: impl Into<String>,
        order: i64,
    ) -> Self {
        Self {
            id,
            project_id,
            title: title.into(),
            href: href.into(),
            order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_page_starts_at_version_one() {
        let page = WikiPage::new(
            5,
            "home",
            "# Welcome",
            Project::new(1, "tundra-backend", "Tundra Backend"),
        );

        assert_eq!(page.version, 1);
        assert!(page.owner.is_none());
        assert!(page.last_modifier.is_none());
    }
}
