//! Human-readable rendering of a [`SurfaceDiff`].
//!
//! Presentation only; the structured report is the source of truth. The
//! class section's lines are omitted entirely when the class-name sets
//! are identical, matching the section banners' fixed layout.

use crate::diff::model::{ChangeKind, MethodChange, SurfaceDiff};
use std::fmt::Write as _;

const BANNER: &str = "********************";

fn change_word(kind: ChangeKind) -> &'static str {
    match kind {
        ChangeKind::Added => "Added",
        ChangeKind::Deleted => "Deleted",
    }
}

fn push_banner(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", BANNER);
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", BANNER);
}

fn push_method_section(
    out: &mut String,
    diff: &SurfaceDiff,
    label: &str,
    separator: char,
    changes: &[MethodChange],
) {
    for change in changes {
        let _ = writeln!(
            out,
            "{} -> {} {} {} => {}{}{}",
            diff.old_version,
            diff.new_version,
            change_word(change.kind),
            label,
            change.class_name,
            separator,
            change.method_name,
        );
    }
}

/// Render the three report sections as text.
///
/// Line format follows the classic differ output:
/// `1.0 -> 2.0 Added Instance Method => Point#z`, with `#` separating
/// instance methods and `.` separating class methods.
pub fn render(diff: &SurfaceDiff) -> String {
    let mut out = String::new();

    push_banner(&mut out, "Class");
    for change in &diff.class_changes {
        let _ = writeln!(
            out,
            "{} -> {} {} Class => {}",
            diff.old_version,
            diff.new_version,
            change_word(change.kind),
            change.name,
        );
    }

    push_banner(&mut out, "Instance Methods");
    push_method_section(
        &mut out,
        diff,
        "Instance Method",
        '#',
        &diff.instance_method_changes,
    );

    push_banner(&mut out, "Class Methods");
    push_method_section(
        &mut out,
        diff,
        "Class Method",
        '.',
        &diff.class_method_changes,
    );

    out
}
