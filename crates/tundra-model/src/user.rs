use serde::{Deserialize, Serialize};

/// An account snapshot referenced by ownership, assignment and watch lists
///
/// Carries exactly what the payload layer renders about a person: identity,
/// display names and the portrait source. Permissions and authentication
/// state never reach this layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Storage identifier
    pub id: i64,

    /// Login handle, unique across the installation
    pub username: String,

    /// Display name as entered by the user (may be empty)
    pub full_name: String,

    /// Primary email address, source of the gravatar fallback
    pub email: String,

    /// Stored portrait URL, if the user uploaded one
    pub photo: Option<String>,
}

impl User {
    /// Create a user snapshot without a stored portrait
    pub fn new(
        id: i64,
        username: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            full_name: full_name.into(),
            email: email.into(),
            photo: None,
        }
    }

    /// Check whether the user uploaded a portrait
    pub fn has_photo(&self) -> bool {
        self.photo.is_some()
    }

    /// Display name, falling back to the username when never filled in
    pub fn display_full_name(&self) -> &str {
        if self.full_name.is_empty() {
            &self.username
        } else {
            &self.full_name
        }
    }
}
