use thiserror::Error;

/// Result type alias using PayloadError
pub type Result<T> = std::result::Result<T, PayloadError>;

/// Errors raised while shaping payloads
///
/// Payload assembly works over fully materialized snapshots, so almost
/// nothing can fail. The exception is the history values diff, which arrives
/// as free-form JSON from the history subsystem and carries a structural
/// contract this layer asserts instead of trusting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PayloadError {
    /// A non-exempt diff entry is not a two-element change pair
    #[error("values diff entry {field:?} is not a two-element [old, new] pair, found {found}")]
    DiffEntryNotAPair { field: String, found: String },

    /// The points entry is not an object keyed by role
    #[error("values diff entry \"points\" is not an object keyed by role, found {found}")]
    PointsDiffNotAnObject { found: String },

    /// One role inside the points entry is not a two-element change pair
    #[error("points diff for role {role:?} is not a two-element [old, new] pair, found {found}")]
    PointsEntryNotAPair { role: String, found: String },
}
