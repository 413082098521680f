//! Front-end permalink construction
//!
//! Payloads link back into the single-page front-end, which owns its own
//! routing table. This module mirrors the handful of routes payloads need,
//! anchored at a configurable base URL.

use serde::{Deserialize, Serialize};

/// Default front-end base URL (the development server)
pub const DEFAULT_FRONT_BASE_URL: &str = "http://localhost:9001";

/// Permalink builder for the front-end routes payloads expose
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontUrls {
    /// Base URL of the front-end installation, without a trailing slash
    pub base_url: String,
}

impl Default for FrontUrls {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_FRONT_BASE_URL.to_string(),
        }
    }
}

impl FrontUrls {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Permalink of a user profile
    pub fn user(&self, username: &str) -> String {
        format!("{}/profile/{}", self.base_url, username)
    }

    /// Permalink of a project home
    pub fn project(&self, project_slug: &str) -> String {
        format!("{}/project/{}", self.base_url, project_slug)
    }

    /// Permalink of a user story detail page
    pub fn user_story(&self, project_slug: &str, reference: i64) -> String {
        format!("{}/project/{}/us/{}", self.base_url, project_slug, reference)
    }

    /// Permalink of a task detail page
    pub fn task(&self, project_slug: &str, reference: i64) -> String {
        format!("{}/project/{}/task/{}", self.base_url, project_slug, reference)
    }

    /// Permalink of an issue detail page
    pub fn issue(&self, project_slug: &str, reference: i64) -> String {
        format!(
            "{}/project/{}/issue/{}",
            self.base_url, project_slug, reference
        )
    }

    /// Permalink of a sprint taskboard
    pub fn taskboard(&self, project_slug: &str, milestone_slug: &str) -> String {
        format!(
            "{}/project/{}/taskboard/{}",
            self.base_url, project_slug, milestone_slug
        )
    }

    /// Permalink of a wiki page
    pub fn wiki(&self, project_slug: &str, page_slug: &str) -> String {
        format!(
            "{}/project/{}/wiki/{}",
            self.base_url, project_slug, page_slug
        )
    }
}
