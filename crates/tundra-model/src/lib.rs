//! Tundra Model - domain snapshots for the payload layer
//!
//! This crate defines the in-memory shapes of the project-tracking domain as
//! the payload layer receives them: fully materialized object graphs with
//! their related rows already loaded. The structures are read-only from the
//! payload layer's point of view; constructors and small predicates exist to
//! assemble and inspect snapshots, not to run a lifecycle.
//!
//! Persistence, query execution and history tracking live outside this
//! workspace. Whatever loads a snapshot is responsible for denormalizing the
//! relations a payload needs (project inside milestone, statuses inside
//! stories, logs inside webhooks, and so on).

pub mod attributes;
pub mod history;
pub mod issue;
pub mod milestone;
pub mod project;
pub mod story;
pub mod task;
pub mod user;
pub mod webhook;
pub mod wiki;

// Re-export commonly used types
pub use attributes::{CustomAttributeDef, CustomAttributeValues};
pub use history::HistoryEntry;
pub use issue::{Issue, IssueStatus, IssueType, Priority, Severity};
pub use milestone::Milestone;
pub use project::Project;
pub use story::{RolePoints, UserStory, UserStoryStatus};
pub use task::{Task, TaskStatus};
pub use user::User;
pub use webhook::{Webhook, WebhookLog};
pub use wiki::{WikiLink, WikiPage};
