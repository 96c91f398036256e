//! Read access to the entity store, keyed by version, class, and method kind.
//!
//! All listings come back in a deterministic order: versions by insertion
//! (rowid), classes and methods lexicographically by name.

use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, OptionalExtension};
use strata_core::errors::StrataError;
use strata_core::model::{ClassEntry, MethodKind, Version};

/// List all captured versions in insertion order.
pub fn list_versions(conn: &Connection) -> Result<Vec<Version>> {
    let mut stmt = conn
        .prepare("SELECT id, name, captured_at FROM versions ORDER BY id")
        .map_err(from_rusqlite)?;

    let rows = stmt
        .query_map([], |row| {
            Ok(Version {
                id: row.get(0)?,
                name: row.get(1)?,
                captured_at: row.get(2)?,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(rows)
}

/// Look up a version by its unique name.
///
/// # Errors
///
/// - `VersionNotFound` — no row with the given name exists
/// - `Storage` — SQLite read failed
pub fn find_version_by_name(conn: &Connection, name: &str) -> Result<Version> {
    conn.query_row(
        "SELECT id, name, captured_at FROM versions WHERE name = ?1",
        [name],
        |row| {
            Ok(Version {
                id: row.get(0)?,
                name: row.get(1)?,
                captured_at: row.get(2)?,
            })
        },
    )
    .optional()
    .map_err(from_rusqlite)?
    .ok_or_else(|| StrataError::VersionNotFound {
        name: name.to_string(),
    })
}

/// List a version's classes, ordered by name.
pub fn list_classes(conn: &Connection, version_id: i64) -> Result<Vec<ClassEntry>> {
    let mut stmt = conn
        .prepare("SELECT id, version_id, name FROM classes WHERE version_id = ?1 ORDER BY name")
        .map_err(from_rusqlite)?;

    let rows = stmt
        .query_map([version_id], |row| {
            Ok(ClassEntry {
                id: row.get(0)?,
                version_id: row.get(1)?,
                name: row.get(2)?,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(rows)
}

/// List one class's method names of the given kind, ordered by name.
pub fn list_methods(
    conn: &Connection,
    kind: MethodKind,
    version_id: i64,
    class_id: i64,
) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare(
            "SELECT name FROM methods
             WHERE kind = ?1 AND version_id = ?2 AND class_id = ?3
             ORDER BY name",
        )
        .map_err(from_rusqlite)?;

    let rows = stmt
        .query_map(
            rusqlite::params![kind.as_db(), version_id, class_id],
            |row| row.get::<_, String>(0),
        )
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(rows)
}
