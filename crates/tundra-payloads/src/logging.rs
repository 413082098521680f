//! Logging initialization
//!
//! Single initialization point for the tracing subscriber of whatever
//! binary embeds this layer. Payload assembly emits a handful of debug
//! events; the embedding service decides where they go.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Silent registry for deterministic testing
    Test,
}

static INIT_ONCE: Once = Once::new();

/// `RUST_LOG` wins; the profile default applies otherwise.
fn filter_or(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Initialize the logging facility
///
/// Call once at startup. Later calls are no-ops, so test suites can call
/// it from every test without coordination.
///
/// # Profiles
///
/// - **Development**: human-readable logs, `tundra=debug` by default
/// - **Production**: JSON structured logs, `tundra=info` by default
/// - **Test**: bare registry, nothing is emitted
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_env_filter(filter_or("tundra=debug"))
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter_or("tundra=info"))
                .init();
        }
        Profile::Test => {
            tracing_subscriber::registry().init();
        }
    });
}
