//! Markdown rendering seam
//!
//! Wiki detail payloads carry the rendered HTML of the page next to the raw
//! source. The markdown pipeline (project-aware mentions, issue references
//! and so on) lives outside this workspace, so payload builders take the
//! renderer as a trait object.

use tundra_model::Project;

/// Renderer turning raw wiki markdown into HTML
pub trait MarkdownRenderer {
    /// Render raw markdown in the context of its project
    ///
    /// The project drives context-dependent pieces such as #ref links and
    /// user mentions.
    fn render(&self, project: &Project, raw: &str) -> String;
}

/// Renderer that passes the raw source through unchanged
///
/// For environments without a markdown pipeline, and for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMarkdownRenderer;

impl MarkdownRenderer for NoopMarkdownRenderer {
    fn render(&self, _project: &Project, raw: &str) -> String {
        raw.to_string()
    }
}
