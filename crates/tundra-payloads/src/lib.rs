//! Tundra Payloads - presentation-layer serializers
//!
//! This crate turns domain snapshots into the plain key-value structures the
//! outside world sees, including:
//! - Webhook event payloads for stories, tasks, issues, milestones and wiki
//!   pages, with nested user/project/status records
//! - Webhook administration and delivery-log payloads
//! - Wiki API and search result payloads
//! - History values diff reshaping into from/to form
//! - Custom attribute resolution from id-keyed storage to name-keyed output
//!
//! Every payload is a typed record with an explicit `build` constructor;
//! ambient context (front-end URLs, avatar resolution, markdown rendering)
//! is passed in rather than read from globals. Builders allocate but never
//! touch the outside world, so they are safe to call from any thread.

pub mod attributes;
pub mod avatar;
pub mod diff;
pub mod errors;
pub mod front;
pub mod logging;
pub mod markdown;
pub mod search;
pub mod webhooks;
pub mod wiki;

// Re-export commonly used types
pub use attributes::resolve_custom_attributes;
pub use avatar::{AvatarSource, Gravatar, GravatarConfig};
pub use diff::format_values_diff;
pub use errors::{PayloadError, Result};
pub use front::FrontUrls;
pub use markdown::{MarkdownRenderer, NoopMarkdownRenderer};
