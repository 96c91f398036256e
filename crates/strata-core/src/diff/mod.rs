//! Structural diff between two captured versions.
//!
//! The entry point is [`engine::compute_diff`], which compares two loaded
//! [`crate::model::VersionSurface`] values and produces a
//! [`model::SurfaceDiff`]. Rendering to text lives in [`human_summary`].

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::compute_diff;
pub use model::{ChangeKind, ClassChange, MethodChange, SurfaceDiff};
