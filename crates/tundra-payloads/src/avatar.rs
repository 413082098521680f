//! Portrait URL resolution
//!
//! Payloads expose two portrait fields per user: the gravatar URL derived
//! from the email address, and a photo field that prefers an uploaded
//! portrait and falls back to gravatar. The CDN serving uploaded portraits
//! is outside this layer; its URLs arrive materialized on the snapshot.

use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use tundra_model::User;

/// Default gravatar endpoint
pub const DEFAULT_GRAVATAR_BASE_URL: &str = "https://www.gravatar.com/avatar";

/// Gravatar endpoint settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GravatarConfig {
    /// Endpoint the hash is appended to, without a trailing slash
    pub base_url: String,

    /// Requested portrait size in pixels
    pub size: u32,

    /// Fallback image style for addresses without a gravatar account
    pub default_image: String,
}

impl Default for GravatarConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GRAVATAR_BASE_URL.to_string(),
            size: 80,
            default_image: "identicon".to_string(),
        }
    }
}

/// Source of portrait URLs for user payloads
pub trait AvatarSource {
    /// Gravatar URL for an email address
    fn gravatar_url(&self, email: &str) -> String;

    /// Uploaded portrait if the user has one, gravatar otherwise
    fn photo_or_gravatar_url(&self, user: &User) -> String {
        match &user.photo {
            Some(photo) => photo.clone(),
            None => self.gravatar_url(&user.email),
        }
    }
}

/// AvatarSource backed by the public gravatar service
///
/// Hashes the trimmed, lowercased email with MD5 per the gravatar contract
/// and appends the size and fallback-image query.
#[derive(Debug, Clone, Default)]
pub struct Gravatar {
    config: GravatarConfig,
}

impl Gravatar {
    pub fn new(config: GravatarConfig) -> Self {
        Self { config }
    }
}

impl AvatarSource for Gravatar {
    fn gravatar_url(&self, email: &str) -> String {
        let normalized = email.trim().to_lowercase();
        let mut hasher = Md5::new();
        hasher.update(normalized.as_bytes());
        let hash = hex::encode(hasher.finalize());
        format!(
            "{}/{}?s={}&d={}",
            self.config.base_url, hash, self.config.size, self.config.default_image
        )
    }
}
