//! Snapshot Builder: one introspection pass -> durable entity rows.

use crate::errors::{from_rusqlite, Result};
use crate::registry;
use rusqlite::{Connection, OptionalExtension};
use strata_core::model::{ClassSurface, MethodKind};

/// Result of a surface capture.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureSummary {
    pub version_id: i64,
    pub version_name: String,
    /// Classes visited in this pass (after exclusion filtering)
    pub classes_seen: usize,
    /// Method names visited across both kinds
    pub methods_seen: usize,
    /// True when the Version row already existed (idempotent re-capture)
    pub version_existed: bool,
}

/// Capture one introspection pass as a snapshot of `name`.
///
/// Resolves the Version once, then registers every class and its method
/// names through the idempotent find-or-create path. The whole pass runs
/// inside a single transaction; nothing is visible until commit.
///
/// Processing order is lexicographic by class name and method name, so a
/// capture writes rows in a reproducible order regardless of how the
/// supplier ordered the tuple sequence. Re-running the same capture for
/// the same version name leaves the store unchanged.
pub fn capture_surface(
    conn: &mut Connection,
    name: &str,
    captured_at: i64,
    surface: &[ClassSurface],
) -> Result<CaptureSummary> {
    let tx = conn.transaction().map_err(from_rusqlite)?;

    let version_existed = tx
        .query_row("SELECT 1 FROM versions WHERE name = ?1", [name], |_| {
            Ok(true)
        })
        .optional()
        .map_err(from_rusqlite)?
        .unwrap_or(false);

    let version = registry::find_or_create_version(&tx, name, captured_at)?;

    let mut ordered: Vec<&ClassSurface> = surface.iter().collect();
    ordered.sort_by(|a, b| a.name.cmp(&b.name));

    let mut methods_seen = 0usize;
    for class in &ordered {
        let entry = registry::find_or_create_class(&tx, &class.name, version.id)?;

        let mut instance = class.instance_methods.clone();
        instance.sort();
        for method in &instance {
            registry::find_or_create_method(&tx, method, MethodKind::Instance, version.id, entry.id)?;
        }

        let mut class_level = class.class_methods.clone();
        class_level.sort();
        for method in &class_level {
            registry::find_or_create_method(&tx, method, MethodKind::Class, version.id, entry.id)?;
        }

        methods_seen += instance.len() + class_level.len();

        tracing::debug!(
            class = %class.name,
            instance_methods = instance.len(),
            class_methods = class_level.len(),
            "registered class surface"
        );
    }

    tx.commit().map_err(from_rusqlite)?;

    tracing::debug!(
        version = %name,
        classes = ordered.len(),
        methods = methods_seen,
        version_existed,
        "surface capture complete"
    );

    Ok(CaptureSummary {
        version_id: version.id,
        version_name: version.name,
        classes_seen: ordered.len(),
        methods_seen,
        version_existed,
    })
}
