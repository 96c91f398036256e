// Integration tests for the snapshot reader and the end-to-end diff path
// Covers the full capture -> load -> diff scenario across two versions

use rusqlite::Connection;
use strata_core::diff::{self, ChangeKind};
use strata_core::errors::StrataError;
use strata_core::model::ClassSurface;
use strata_store::{capture, db, migrations, reader};

fn setup_test_db() -> Connection {
    let mut conn = db::open_in_memory().unwrap();
    db::configure(&conn).unwrap();
    migrations::apply_migrations(&mut conn).unwrap();
    conn
}

fn class(name: &str, instance: &[&str], class_level: &[&str]) -> ClassSurface {
    ClassSurface {
        name: name.to_string(),
        instance_methods: instance.iter().map(|s| s.to_string()).collect(),
        class_methods: class_level.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn test_load_snapshot_missing_version() {
    let conn = setup_test_db();

    let err = reader::load_snapshot(&conn, "v9.9.9").unwrap_err();

    assert_eq!(
        err,
        StrataError::VersionNotFound {
            name: "v9.9.9".to_string()
        }
    );
}

#[test]
fn test_load_snapshot_materializes_both_kinds() {
    let mut conn = setup_test_db();
    capture::capture_surface(&mut conn, "1.0", 0, &[class("Point", &["x", "y"], &["new"])])
        .unwrap();

    let snapshot = reader::load_snapshot(&conn, "1.0").unwrap();

    assert_eq!(snapshot.name, "1.0");
    let point = &snapshot.classes["Point"];
    assert!(point.instance.contains("x"));
    assert!(point.instance.contains("y"));
    assert!(point.class.contains("new"));
    assert!(!point.class.contains("x"), "kinds must not bleed together");
}

#[test]
fn test_point_evolution_scenario() {
    // Given: version 1.0 with Point{instance: [x,y], class: [new]}
    // And: version 2.0 with Point{instance: [x,y,z], class: [new, origin]}
    let mut conn = setup_test_db();
    capture::capture_surface(&mut conn, "1.0", 0, &[class("Point", &["x", "y"], &["new"])])
        .unwrap();
    capture::capture_surface(
        &mut conn,
        "2.0",
        0,
        &[class("Point", &["x", "y", "z"], &["new", "origin"])],
    )
    .unwrap();

    // When: diffing 1.0 -> 2.0
    let old = reader::load_snapshot(&conn, "1.0").unwrap();
    let new = reader::load_snapshot(&conn, "2.0").unwrap();
    let result = diff::compute_diff(&old, &new);

    // Then: no class changes, one added instance method, one added class method
    assert!(result.class_changes.is_empty());

    assert_eq!(result.instance_method_changes.len(), 1);
    let added = &result.instance_method_changes[0];
    assert_eq!(added.class_name, "Point");
    assert_eq!(added.method_name, "z");
    assert_eq!(added.kind, ChangeKind::Added);

    assert_eq!(result.class_method_changes.len(), 1);
    let added = &result.class_method_changes[0];
    assert_eq!(added.method_name, "origin");
    assert_eq!(added.kind, ChangeKind::Added);
}

#[test]
fn test_diff_is_read_only() {
    let mut conn = setup_test_db();
    capture::capture_surface(&mut conn, "1.0", 0, &[class("A", &["m"], &[])]).unwrap();
    capture::capture_surface(&mut conn, "2.0", 0, &[class("B", &["m"], &[])]).unwrap();

    let before: i64 = conn
        .query_row(
            "SELECT (SELECT COUNT(*) FROM versions) + (SELECT COUNT(*) FROM classes) + (SELECT COUNT(*) FROM methods)",
            [],
            |r| r.get(0),
        )
        .unwrap();

    let old = reader::load_snapshot(&conn, "1.0").unwrap();
    let new = reader::load_snapshot(&conn, "2.0").unwrap();
    let _ = diff::compute_diff(&old, &new);

    let after: i64 = conn
        .query_row(
            "SELECT (SELECT COUNT(*) FROM versions) + (SELECT COUNT(*) FROM classes) + (SELECT COUNT(*) FROM methods)",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(before, after);
}
