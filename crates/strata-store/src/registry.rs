//! Idempotent find-or-create registration for the three entity kinds.
//!
//! Each operation is a single constrained INSERT that no-ops on conflict
//! with the entity's unique key, followed by a re-read of the persisted
//! row. Registering the same key twice returns the same row and never
//! errors; duplicate names inside one introspection pass are absorbed the
//! same way.

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;
use strata_core::model::{ClassEntry, MethodKind, Version};

/// Resolve or create the Version row for a runtime version string.
///
/// `captured_at` is only written on first creation; a re-capture keeps the
/// original timestamp.
pub fn find_or_create_version(conn: &Connection, name: &str, captured_at: i64) -> Result<Version> {
    conn.execute(
        "INSERT INTO versions (name, captured_at) VALUES (?1, ?2)
         ON CONFLICT(name) DO NOTHING",
        rusqlite::params![name, captured_at],
    )
    .map_err(from_rusqlite)?;

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
    .map_err(from_rusqlite)
}

/// Resolve or create the ClassEntry for `(name, version_id)`.
pub fn find_or_create_class(conn: &Connection, name: &str, version_id: i64) -> Result<ClassEntry> {
    conn.execute(
        "INSERT INTO classes (name, version_id) VALUES (?1, ?2)
         ON CONFLICT(name, version_id) DO NOTHING",
        rusqlite::params![name, version_id],
    )
    .map_err(from_rusqlite)?;

    conn.query_row(
        "SELECT id, version_id, name FROM classes WHERE name = ?1 AND version_id = ?2",
        rusqlite::params![name, version_id],
        |row| {
            Ok(ClassEntry {
                id: row.get(0)?,
                version_id: row.get(1)?,
                name: row.get(2)?,
            })
        },
    )
    .map_err(from_rusqlite)
}

/// Register a method under its four-part unique key.
///
/// No meaningful return value beyond success.
pub fn find_or_create_method(
    conn: &Connection,
    name: &str,
    kind: MethodKind,
    version_id: i64,
    class_id: i64,
) -> Result<()> {
    conn.execute(
        "INSERT INTO methods (name, kind, version_id, class_id) VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(version_id, class_id, name, kind) DO NOTHING",
        rusqlite::params![name, kind.as_db(), version_id, class_id],
    )
    .map_err(from_rusqlite)?;

    Ok(())
}
