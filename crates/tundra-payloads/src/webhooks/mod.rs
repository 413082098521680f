//! Webhook payload records
//!
//! One record type per payload, with the wire shape declared as serde
//! fields and an explicit `build` constructor that walks the snapshot.
//! Nested payloads (project inside milestone, status inside story) are
//! built first and spliced in as fields, so composition stays visible at
//! the call site.
//!
//! Builders take the ambient context they need as arguments: `FrontUrls`
//! for permalinks and an `AvatarSource` for portrait URLs. Everything is
//! infallible except the history entry payload, whose values diff carries
//! a structural contract checked at build time.

pub mod admin;
pub mod history;
pub mod issue;
pub mod milestone;
pub mod project;
pub mod story;
pub mod task;
pub mod user;
pub mod wiki;

pub use admin::{WebhookLogPayload, WebhookPayload};
pub use history::HistoryEntryPayload;
pub use issue::{
    IssuePayload, IssueStatusPayload, IssueTypePayload, PriorityPayload, SeverityPayload,
};
pub use milestone::MilestonePayload;
pub use project::ProjectPayload;
pub use story::{RolePointsPayload, UserStoryPayload, UserStoryStatusPayload};
pub use task::{TaskPayload, TaskStatusPayload};
pub use user::UserPayload;
pub use wiki::WikiPagePayload;
