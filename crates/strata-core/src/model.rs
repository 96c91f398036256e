//! Domain model: versioned entity records, introspection tuples, and
//! comparison-ready snapshot structures.
//!
//! All entities are immutable once written; the only lifecycle transition
//! is "does not exist" -> "exists". Identity is carried by SQLite rowids,
//! surfaced here as plain `i64` fields.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// The two disjoint kinds of callable members tracked per class.
///
/// Stored as an INTEGER column: 0 = Instance, 1 = Class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MethodKind {
    Instance,
    Class,
}

impl MethodKind {
    /// Stable storage encoding
    pub fn as_db(self) -> i64 {
        match self {
            MethodKind::Instance => 0,
            MethodKind::Class => 1,
        }
    }

    /// Decode the storage encoding; `None` for any other value
    pub fn from_db(value: i64) -> Option<Self> {
        match value {
            0 => Some(MethodKind::Instance),
            1 => Some(MethodKind::Class),
            _ => None,
        }
    }
}

/// One captured runtime snapshot
///
/// `name` is globally unique. Re-capturing the same version name reuses
/// the existing row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Version {
    pub id: i64,

    /// Runtime version string, e.g. "3.2.0"
    pub name: String,

    /// Unix seconds of first capture. Informational only; not part of
    /// identity and never compared by the diff engine.
    pub captured_at: i64,
}

/// A class name scoped to one version
///
/// The same class name appearing in two versions is two distinct rows
/// with distinct ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassEntry {
    pub id: i64,
    pub version_id: i64,
    pub name: String,
}

/// Introspection tuple: one class and its member-name lists
///
/// This is the opaque unit the snapshot builder consumes; how the list is
/// produced (live reflection, pre-generated manifest) is the supplier's
/// concern. Method-name ordering is not significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSurface {
    pub name: String,

    #[serde(default)]
    pub instance_methods: Vec<String>,

    #[serde(default)]
    pub class_methods: Vec<String>,
}

/// Caller-supplied class-name prefixes excluded from capture
///
/// Empty by default: excluding a tool's own implementation classes is a
/// policy of the introspection supplier, not of the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExcludeList {
    prefixes: Vec<String>,
}

impl ExcludeList {
    /// Build an exclusion list, discarding empty prefixes
    pub fn new(prefixes: Vec<String>) -> Self {
        Self {
            prefixes: prefixes.into_iter().filter(|p| !p.is_empty()).collect(),
        }
    }

    /// True if the class name starts with any excluded prefix
    pub fn is_excluded(&self, class_name: &str) -> bool {
        self.prefixes.iter().any(|p| class_name.starts_with(p))
    }

    /// Drop excluded classes from an introspection pass
    pub fn apply(&self, surface: Vec<ClassSurface>) -> Vec<ClassSurface> {
        surface
            .into_iter()
            .filter(|c| !self.is_excluded(&c.name))
            .collect()
    }
}

/// Method-name sets for one class, split by kind
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassMethods {
    pub instance: BTreeSet<String>,
    pub class: BTreeSet<String>,
}

/// A fully loaded snapshot, ready for comparison
///
/// Keyed by class name (BTreeMap for deterministic iteration). The
/// per-version ClassEntry ids are already resolved away: two surfaces of
/// the same class name in different versions compare by name sets only.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionSurface {
    pub version_id: i64,
    pub name: String,
    pub classes: BTreeMap<String, ClassMethods>,
}
