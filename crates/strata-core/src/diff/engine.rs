//! Surface diff computation engine.
//!
//! Pure set algebra over two loaded [`VersionSurface`] values; no storage
//! access and no side effects, so a diff may run repeatedly or concurrently
//! for any version pair.

use crate::diff::model::{ChangeKind, ClassChange, MethodChange, SurfaceDiff};
use crate::model::VersionSurface;
use std::collections::BTreeSet;

/// Compute a set-delta between two name sets.
///
/// Returns `(added, deleted)` where added = in `new` but not `old`,
/// deleted = in `old` but not `new`. Both lists come out sorted because
/// the inputs are ordered sets.
fn set_delta(old: &BTreeSet<String>, new: &BTreeSet<String>) -> (Vec<String>, Vec<String>) {
    let added = new.difference(old).cloned().collect();
    let deleted = old.difference(new).cloned().collect();
    (added, deleted)
}

/// Append one class's method delta, deletions first, to a report section.
fn push_method_changes(
    section: &mut Vec<MethodChange>,
    class_name: &str,
    old: &BTreeSet<String>,
    new: &BTreeSet<String>,
) {
    let (added, deleted) = set_delta(old, new);
    for name in deleted {
        section.push(MethodChange {
            class_name: class_name.to_string(),
            method_name: name,
            kind: ChangeKind::Deleted,
        });
    }
    for name in added {
        section.push(MethodChange {
            class_name: class_name.to_string(),
            method_name: name,
            kind: ChangeKind::Added,
        });
    }
}

/// Compute the structural diff between two loaded snapshots.
///
/// 1. class delta: deleted = old − new, added = new − old
/// 2. shared = old ∩ new
/// 3. per shared class, instance-method delta
/// 4. per shared class, class-method delta
///
/// Classes absent from one side contribute nothing to the method sections.
pub fn compute_diff(old: &VersionSurface, new: &VersionSurface) -> SurfaceDiff {
    let old_names: BTreeSet<String> = old.classes.keys().cloned().collect();
    let new_names: BTreeSet<String> = new.classes.keys().cloned().collect();

    let (added_classes, deleted_classes) = set_delta(&old_names, &new_names);

    let mut class_changes = Vec::with_capacity(added_classes.len() + deleted_classes.len());
    for name in deleted_classes {
        class_changes.push(ClassChange {
            name,
            kind: ChangeKind::Deleted,
        });
    }
    for name in added_classes {
        class_changes.push(ClassChange {
            name,
            kind: ChangeKind::Added,
        });
    }

    let mut instance_method_changes = Vec::new();
    let mut class_method_changes = Vec::new();

    // BTreeSet intersection iterates in lexicographic class-name order
    for class_name in old_names.intersection(&new_names) {
        let old_methods = &old.classes[class_name];
        let new_methods = &new.classes[class_name];

        push_method_changes(
            &mut instance_method_changes,
            class_name,
            &old_methods.instance,
            &new_methods.instance,
        );
        push_method_changes(
            &mut class_method_changes,
            class_name,
            &old_methods.class,
            &new_methods.class,
        );
    }

    SurfaceDiff {
        old_version: old.name.clone(),
        new_version: new.name.clone(),
        class_changes,
        instance_method_changes,
        class_method_changes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ClassMethods;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    fn names(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn surface(version: &str, classes: &[(&str, &[&str], &[&str])]) -> VersionSurface {
        let mut map = BTreeMap::new();
        for (class_name, instance, class) in classes {
            map.insert(
                class_name.to_string(),
                ClassMethods {
                    instance: names(instance),
                    class: names(class),
                },
            );
        }
        VersionSurface {
            version_id: 0,
            name: version.to_string(),
            classes: map,
        }
    }

    #[test]
    fn test_class_set_diff() {
        // {A,B,C} vs {B,C,D} reports deleted {A}, added {D}
        let old = surface("1.0", &[("A", &[], &[]), ("B", &[], &[]), ("C", &[], &[])]);
        let new = surface("2.0", &[("B", &[], &[]), ("C", &[], &[]), ("D", &[], &[])]);

        let diff = compute_diff(&old, &new);

        assert_eq!(
            diff.class_changes,
            vec![
                ClassChange {
                    name: "A".to_string(),
                    kind: ChangeKind::Deleted,
                },
                ClassChange {
                    name: "D".to_string(),
                    kind: ChangeKind::Added,
                },
            ]
        );
    }

    #[test]
    fn test_identical_class_sets_report_no_class_changes() {
        let old = surface("1.0", &[("A", &["x"], &[])]);
        let new = surface("2.0", &[("A", &["x"], &[])]);

        let diff = compute_diff(&old, &new);

        assert!(diff.class_changes.is_empty());
        assert!(diff.is_empty());
    }

    #[test]
    fn test_method_diff_scoped_to_shared_classes() {
        // Shared has {foo,bar} -> {bar,baz}; NonShared exists only in old
        let old = surface(
            "1.0",
            &[
                ("NonShared", &["gone"], &["also_gone"]),
                ("Shared", &["bar", "foo"], &[]),
            ],
        );
        let new = surface("2.0", &[("Shared", &["bar", "baz"], &[])]);

        let diff = compute_diff(&old, &new);

        assert_eq!(
            diff.instance_method_changes,
            vec![
                MethodChange {
                    class_name: "Shared".to_string(),
                    method_name: "foo".to_string(),
                    kind: ChangeKind::Deleted,
                },
                MethodChange {
                    class_name: "Shared".to_string(),
                    method_name: "baz".to_string(),
                    kind: ChangeKind::Added,
                },
            ]
        );
        // NonShared contributes nothing to the method sections
        assert!(diff.class_method_changes.is_empty());
    }

    #[test]
    fn test_instance_and_class_kinds_tracked_independently() {
        let old = surface("1.0", &[("Point", &["x", "y"], &["new"])]);
        let new = surface("2.0", &[("Point", &["x", "y", "z"], &["new", "origin"])]);

        let diff = compute_diff(&old, &new);

        assert!(diff.class_changes.is_empty());
        assert_eq!(
            diff.instance_method_changes,
            vec![MethodChange {
                class_name: "Point".to_string(),
                method_name: "z".to_string(),
                kind: ChangeKind::Added,
            }]
        );
        assert_eq!(
            diff.class_method_changes,
            vec![MethodChange {
                class_name: "Point".to_string(),
                method_name: "origin".to_string(),
                kind: ChangeKind::Added,
            }]
        );
    }

    #[test]
    fn test_changes_ordered_by_class_then_name() {
        let old = surface("1.0", &[("B", &["b1"], &[]), ("A", &["a2", "a1"], &[])]);
        let new = surface("2.0", &[("B", &[], &[]), ("A", &[], &[])]);

        let diff = compute_diff(&old, &new);

        let order: Vec<(&str, &str)> = diff
            .instance_method_changes
            .iter()
            .map(|c| (c.class_name.as_str(), c.method_name.as_str()))
            .collect();
        assert_eq!(order, vec![("A", "a1"), ("A", "a2"), ("B", "b1")]);
    }

    proptest! {
        #[test]
        fn prop_set_delta_is_sound(
            old in proptest::collection::btree_set("[a-z]{1,6}", 0..16),
            new in proptest::collection::btree_set("[a-z]{1,6}", 0..16),
        ) {
            let (added, deleted) = set_delta(&old, &new);

            for name in &added {
                prop_assert!(new.contains(name) && !old.contains(name));
            }
            for name in &deleted {
                prop_assert!(old.contains(name) && !new.contains(name));
            }
            // Everything in exactly one input appears in exactly one delta
            prop_assert_eq!(
                added.len() + deleted.len(),
                new.symmetric_difference(&old).count()
            );
        }

        #[test]
        fn prop_equal_sets_yield_empty_delta(
            set in proptest::collection::btree_set("[a-z]{1,6}", 0..16),
        ) {
            let (added, deleted) = set_delta(&set, &set);
            prop_assert!(added.is_empty());
            prop_assert!(deleted.is_empty());
        }
    }
}
