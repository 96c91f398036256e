//! Surface manifest parser with validation
//!
//! Parses the JSON introspection manifest and validates schema version and
//! names. The manifest is pre-generated by the target runtime's own
//! tooling; Strata never introspects a foreign runtime itself.

use crate::errors::{manifest_error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strata_core::model::ClassSurface;

/// Schema version this parser accepts
pub const MANIFEST_SCHEMA_VERSION: u32 = 0;

/// Top-level manifest structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceManifest {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    /// The runtime this surface was introspected from
    pub runtime: RuntimeInfo,

    /// One entry per named class
    pub classes: Vec<ClassSurface>,
}

/// Identification of the introspected runtime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeInfo {
    /// Runtime name, e.g. "ruby"
    pub name: String,

    /// Runtime version string; the default snapshot name
    pub version: String,
}

/// Parse a manifest file from a path
pub fn parse_manifest_file(path: &Path) -> Result<SurfaceManifest> {
    let content = fs::read_to_string(path)
        .map_err(|e| manifest_error(format!("Failed to read manifest file: {}", e)))?;

    parse_manifest_str(&content)
}

/// Parse a manifest from a string
pub fn parse_manifest_str(content: &str) -> Result<SurfaceManifest> {
    let manifest: SurfaceManifest = serde_json::from_str(content)
        .map_err(|e| manifest_error(format!("JSON parse error: {}", e)))?;

    validate_manifest(&manifest)?;

    Ok(manifest)
}

/// Validate a parsed manifest
///
/// Duplicate class or method names are NOT rejected here; idempotent
/// registration absorbs them during capture.
fn validate_manifest(manifest: &SurfaceManifest) -> Result<()> {
    if manifest.schema_version != MANIFEST_SCHEMA_VERSION {
        return Err(manifest_error(format!(
            "Unsupported schema_version: {}. Expected {}",
            manifest.schema_version, MANIFEST_SCHEMA_VERSION
        )));
    }

    if manifest.runtime.version.is_empty() {
        return Err(manifest_error("runtime.version must not be empty"));
    }

    for class in &manifest.classes {
        if class.name.is_empty() {
            return Err(manifest_error("class entry with empty name"));
        }
    }

    Ok(())
}
