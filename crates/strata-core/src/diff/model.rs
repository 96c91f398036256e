//! Surface diff output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Collections are pre-sorted `Vec`s for deterministic, diffable output.

use serde::{Deserialize, Serialize};

/// Whether an entity appeared or disappeared between the two versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
    /// Present in the new version but not the old
    Added,
    /// Present in the old version but not the new
    Deleted,
}

/// A class present in only one of the two versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassChange {
    pub name: String,
    pub kind: ChangeKind,
}

/// A method added or deleted within a class present in both versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodChange {
    /// The shared class scoping this change
    pub class_name: String,
    pub method_name: String,
    pub kind: ChangeKind,
}

/// The top-level structural diff between two captured versions.
///
/// Three independent sections: classes, instance methods per shared class,
/// class methods per shared class. Each section is ordered by class name
/// then entity name, with deletions before additions within one class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceDiff {
    /// Version name of the old side
    pub old_version: String,
    /// Version name of the new side
    pub new_version: String,
    /// Classes present in only one version
    pub class_changes: Vec<ClassChange>,
    /// Instance-method deltas for classes present in both versions
    pub instance_method_changes: Vec<MethodChange>,
    /// Class-method deltas for classes present in both versions
    pub class_method_changes: Vec<MethodChange>,
}

impl SurfaceDiff {
    /// True when the two surfaces are structurally identical
    pub fn is_empty(&self) -> bool {
        self.class_changes.is_empty()
            && self.instance_method_changes.is_empty()
            && self.class_method_changes.is_empty()
    }
}
