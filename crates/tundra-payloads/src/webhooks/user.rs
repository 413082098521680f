use serde::Serialize;
use tundra_model::User;

use crate::avatar::AvatarSource;
use crate::front::FrontUrls;

/// User as embedded in webhook payloads
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserPayload {
    pub id: i64,
    pub permalink: String,
    pub gravatar_url: String,
    pub username: String,
    pub full_name: String,
    pub photo: String,
}

impl UserPayload {
    /// Build the payload for a user snapshot
    pub fn build(user: &User, urls: &FrontUrls, avatars: &dyn AvatarSource) -> Self {
        Self {
            id: user.id,
            permalink: urls.user(&user.username),
            gravatar_url: avatars.gravatar_url(&user.email),
            username: user.username.clone(),
            full_name: user.display_full_name().to_string(),
            photo: avatars.photo_or_gravatar_url(user),
        }
    }

    /// Build the payload for an optional user reference
    ///
    /// Unassigned and ownerless objects render the whole user field as
    /// JSON null rather than an empty object.
    pub fn build_opt(
        user: Option<&User>,
        urls: &FrontUrls,
        avatars: &dyn AvatarSource,
    ) -> Option<Self> {
        user.map(|user| Self::build(user, urls, avatars))
    }
}
