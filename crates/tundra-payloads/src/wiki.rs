//! Wiki API payload records
//!
//! The REST detail shape differs from the webhook shape: relations flatten
//! to ids, the markdown is rendered to HTML next to the raw source, and the
//! edit count rides along for the history sidebar.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tundra_model::{WikiLink, WikiPage};

use crate::markdown::MarkdownRenderer;

/// Wiki page as returned by the wiki detail API
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WikiPageDetailPayload {
    pub id: i64,
    pub project: i64,
    pub slug: String,
    pub content: String,
    pub owner: Option<i64>,
    pub last_modifier: Option<i64>,
    pub created_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
    pub html: String,
    pub editions: usize,
    pub version: i64,
}

impl WikiPageDetailPayload {
    /// Build the payload for a wiki page snapshot
    ///
    /// `history_entries` is the number of recorded edits; the creation
    /// itself is not recorded, so editions is that count plus one.
    pub fn build(page: &WikiPage, renderer: &dyn MarkdownRenderer, history_entries: usize) -> Self {
        Self {
            id: page.id,
            project: page.project.id,
            slug: page.slug.clone(),
            content: page.content.clone(),
            owner: page.owner.as_ref().map(|owner| owner.id),
            last_modifier: page.last_modifier.as_ref().map(|modifier| modifier.id),
            created_date: page.created_date,
            modified_date: page.modified_date,
            html: renderer.render(&page.project, &page.content),
            editions: history_entries + 1,
            version: page.version,
        }
    }
}

/// Sidebar navigation entry as returned by the wiki API
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WikiLinkPayload {
    pub id: i64,
    pub project: i64,
    pub title: String,
    pub href: String,
    pub order: i64,
}

impl WikiLinkPayload {
    /// Build the payload for a wiki link snapshot
    pub fn build(link: &WikiLink) -> Self {
        Self {
            id: link.id,
            project: link.project_id,
            title: link.title.clone(),
            href: link.href.clone(),
            order: link.order,
        }
    }
}
