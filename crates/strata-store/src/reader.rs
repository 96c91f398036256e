//! Snapshot Reader: materialize a named version into comparison-ready
//! structures.

use crate::errors::Result;
use crate::queries;
use rusqlite::Connection;
use strata_core::model::{ClassMethods, MethodKind, VersionSurface};
use std::collections::BTreeMap;

/// Load a named version's full class/method surface.
///
/// The per-version ClassEntry ids are resolved internally while walking
/// the class list; the caller only ever sees name sets. Read-only.
///
/// # Errors
///
/// - `VersionNotFound` — the name is absent from the store
/// - `Storage` — SQLite read failed
pub fn load_snapshot(conn: &Connection, name: &str) -> Result<VersionSurface> {
    let version = queries::find_version_by_name(conn, name)?;

    let mut classes = BTreeMap::new();
    for entry in queries::list_classes(conn, version.id)? {
        let instance = queries::list_methods(conn, MethodKind::Instance, version.id, entry.id)?;
        let class_level = queries::list_methods(conn, MethodKind::Class, version.id, entry.id)?;

        classes.insert(
            entry.name,
            ClassMethods {
                instance: instance.into_iter().collect(),
                class: class_level.into_iter().collect(),
            },
        );
    }

    Ok(VersionSurface {
        version_id: version.id,
        name: version.name,
        classes,
    })
}
