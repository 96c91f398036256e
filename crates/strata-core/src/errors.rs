//! Error taxonomy for Strata operations

use thiserror::Error;

/// Result type alias using StrataError
pub type Result<T> = std::result::Result<T, StrataError>;

/// Error taxonomy for Strata operations
///
/// `VersionNotFound` is the one error callers are expected to handle
/// explicitly; everything else is fatal at the CLI boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StrataError {
    /// A diff or load referenced a version name absent from the store
    #[error("Runtime version not found: {name}")]
    VersionNotFound { name: String },

    /// The persistence substrate failed (I/O error, constraint violation
    /// outside the modeled unique keys, corruption). Never retried.
    #[error("Storage fault: {message}")]
    Storage { message: String },

    /// An embedded schema migration failed to apply
    #[error("Migration {migration_id} failed: {reason}")]
    Migration {
        migration_id: String,
        reason: String,
    },

    /// A surface manifest was unreadable, unparsable, or structurally invalid
    #[error("Invalid surface manifest: {reason}")]
    InvalidManifest { reason: String },
}

/// Conversion from serde_json::Error to StrataError
impl From<serde_json::Error> for StrataError {
    fn from(err: serde_json::Error) -> Self {
        StrataError::InvalidManifest {
            reason: err.to_string(),
        }
    }
}
