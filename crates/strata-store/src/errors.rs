//! Error handling for strata-store
//!
//! Wraps strata-core's StrataError with store-specific helpers

use strata_core::errors::StrataError;

/// Result type alias using StrataError
pub type Result<T> = std::result::Result<T, StrataError>;

/// Create a storage error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> StrataError {
    StrataError::Storage {
        message: err.to_string(),
    }
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> StrataError {
    StrataError::Migration {
        migration_id: migration_id.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a manifest validation error
pub fn manifest_error(reason: impl Into<String>) -> StrataError {
    StrataError::InvalidManifest {
        reason: reason.into(),
    }
}
