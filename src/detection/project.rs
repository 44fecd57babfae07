//! Project-level stack detection.
//!
//! Classifies a repository by testing each descriptor's marker files against
//! the repository root. Dart/Flutter is the single content-based special
//! case; everything else is filename presence.

use std::collections::BTreeSet;
use std::path::Path;

use crate::detection::descriptor::{DART, FLUTTER};
use crate::detection::file_detection::file_exists;
use crate::detection::pubspec;
use crate::detection::registry::StackRegistry;
use crate::error::{Result, StackScanError};

/// Detects technology stacks in a repository.
#[derive(Debug, Clone, Default)]
pub struct StackDetector {
    registry: StackRegistry,
}

impl StackDetector {
    /// Detector over the built-in stack table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Detector over an explicit registry (built-ins plus overrides).
    pub fn with_registry(registry: StackRegistry) -> Self {
        Self { registry }
    }

    /// The descriptor table this detector works from.
    pub fn registry(&self) -> &StackRegistry {
        &self.registry
    }

    /// Detect which stacks are present at `root`.
    ///
    /// A stack is present when any of its marker files exists directly under
    /// the root. The Dart/Flutter pair resolves to exactly one name via the
    /// pubspec content check. An empty set is a valid result; only a root
    /// that cannot be listed at all is an error.
    pub fn detect_project_stacks(&self, root: &Path) -> Result<BTreeSet<String>> {
        ensure_readable(root)?;

        let pubspec_stack = pubspec::classify(root);
        let mut stacks = BTreeSet::new();

        for descriptor in self.registry.descriptors() {
            if descriptor.name == DART || descriptor.name == FLUTTER {
                if pubspec_stack == Some(descriptor.name.as_str()) {
                    stacks.insert(descriptor.name.clone());
                }
                continue;
            }

            if descriptor
                .marker_files
                .iter()
                .any(|marker| file_exists(root, marker))
            {
                stacks.insert(descriptor.name.clone());
            }
        }

        tracing::debug!("project stacks at {}: {:?}", root.display(), stacks);
        Ok(stacks)
    }

    /// Union of exclude directories over every stack present at `root`.
    ///
    /// Builds one combined exclusion filter for polyglot repositories.
    pub fn all_exclude_dirs(&self, root: &Path) -> Result<BTreeSet<String>> {
        let stacks = self.detect_project_stacks(root)?;
        Ok(stacks
            .iter()
            .flat_map(|name| self.registry.exclude_dirs(name))
            .collect())
    }

    /// Union of lock files over every stack present at `root`.
    pub fn all_lock_files(&self, root: &Path) -> Result<BTreeSet<String>> {
        let stacks = self.detect_project_stacks(root)?;
        Ok(stacks
            .iter()
            .flat_map(|name| self.registry.lock_files(name))
            .collect())
    }
}

/// Fail with [`StackScanError::RepositoryUnreadable`] unless `root` is a
/// directory we can list.
fn ensure_readable(root: &Path) -> Result<()> {
    match std::fs::read_dir(root) {
        Ok(_) => Ok(()),
        Err(_) => Err(StackScanError::RepositoryUnreadable {
            path: root.to_path_buf(),
        }),
    }
}
