use serde::{Deserialize, Serialize};

use crate::attributes::CustomAttributeDef;

/// The container every tracked object belongs to
///
/// Alongside its own display fields, the snapshot carries the per-kind
/// custom attribute definitions in admin-configured order. Serializers for
/// stories, tasks and issues resolve their value documents against the list
/// matching their kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Storage identifier
    pub id: i64,

    /// URL slug, unique across the installation
    pub slug: String,

    /// Display name
    pub name: String,

    /// Large logo thumbnail URL, if a logo was uploaded and thumbnailed
    pub logo_big_url: Option<String>,

    /// Custom attribute definitions for user stories, in admin order
    pub userstory_attributes: Vec<CustomAttributeDef>,

    /// Custom attribute definitions for tasks, in admin order
    pub task_attributes: Vec<CustomAttributeDef>,

    /// Custom attribute definitions for issues, in admin order
    pub issue_attributes: Vec<CustomAttributeDef>,
}

impl Project {
    /// Create a project snapshot with no logo and no custom attributes
    pub fn new(id: i64, slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            slug: slug.into(),
            name: name.into(),
            logo_big_url: None,
            userstory_attributes: Vec::new(),
            task_attributes: Vec::new(),
            issue_attributes: Vec::new(),
        }
    }
}
