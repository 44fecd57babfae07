//! Change-set stack detection.
//!
//! Answers which stacks a version-control change-set touched. The paths come
//! from an external diff call (`git diff --name-only` or similar); this
//! module only matches them against the descriptor table.
//!
//! Marker-file matching here is independent of lock-file exclusion: go.sum
//! is both a change-trigger for the go stack and a file excluded from
//! narrative diffs. The two configurations never imply each other.

use std::collections::BTreeSet;
use std::path::Path;

use crate::detection::descriptor::{StackDescriptor, DART, FLUTTER};
use crate::detection::pubspec;
use crate::detection::registry::StackRegistry;

/// Detect which stacks a change-set touched.
///
/// A stack counts as touched when any path ends with one of its extensions
/// or names one of its marker files. Output is sorted lexicographically and
/// deduplicated so it is stable for display and logging. An empty change-set
/// yields an empty result.
///
/// The Dart/Flutter pair is named from the pubspec.yaml currently on disk at
/// `root`, not from changed-file content; without a pubspec the pair defaults
/// to "dart".
pub fn detect_changed_stacks(
    registry: &StackRegistry,
    root: &Path,
    changed_paths: &[String],
) -> Vec<String> {
    let mut stacks = BTreeSet::new();
    let mut pubspec_stack: Option<&'static str> = None;

    for descriptor in registry.descriptors() {
        if !changed_paths.iter().any(|path| touches(descriptor, path)) {
            continue;
        }

        if descriptor.name == DART || descriptor.name == FLUTTER {
            let resolved =
                *pubspec_stack.get_or_insert_with(|| pubspec::classify(root).unwrap_or(DART));
            stacks.insert(resolved.to_string());
        } else {
            stacks.insert(descriptor.name.clone());
        }
    }

    let result: Vec<String> = stacks.into_iter().collect();
    tracing::debug!("changed stacks: {:?}", result);
    result
}

/// True when `path` matches the descriptor by extension or marker filename.
fn touches(descriptor: &StackDescriptor, path: &str) -> bool {
    if descriptor.matches_extension(path) {
        return true;
    }

    let filename = path.rsplit('/').next().unwrap_or(path);
    descriptor.has_marker(filename)
}
