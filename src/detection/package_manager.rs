//! JavaScript package manager resolution.
//!
//! Resolves which manager governs a javascript project using three signals
//! in decreasing order of reliability: committed lock files, the
//! `packageManager` field in package.json, and finally which manager
//! binaries exist on the current PATH. Falls back to npm.

use std::path::Path;

use crate::detection::command_detection::command_succeeds;
use crate::detection::file_detection::any_file_exists;

/// Managers in priority order, with the lock files that identify each.
const MANAGERS: &[(&str, &[&str])] = &[
    ("bun", &["bun.lockb", "bun.lock"]),
    ("pnpm", &["pnpm-lock.yaml"]),
    ("yarn", &["yarn.lock"]),
    ("npm", &["package-lock.json"]),
];

const DEFAULT_MANAGER: &str = "npm";

/// Resolve the package manager for the javascript project at `root`.
///
/// Never fails: a repository with no signal at all resolves to "npm".
pub fn detect_package_manager(root: &Path) -> String {
    for (manager, lock_files) in MANAGERS {
        if let Some(lock) = any_file_exists(root, lock_files) {
            tracing::debug!("package manager {manager} via lock file {lock}");
            return manager.to_string();
        }
    }

    if let Some(manager) = manifest_package_manager(root) {
        tracing::debug!("package manager {manager} via packageManager field");
        return manager;
    }

    for (manager, _) in MANAGERS {
        if command_succeeds(&format!("{manager} --version")) {
            tracing::debug!("package manager {manager} via PATH");
            return manager.to_string();
        }
    }

    DEFAULT_MANAGER.to_string()
}

/// Read the `packageManager` field from package.json, e.g. "pnpm@8.6.0".
///
/// Unreadable or malformed manifests, and managers this module does not
/// know, all yield `None` so resolution falls through to the next signal.
fn manifest_package_manager(root: &Path) -> Option<String> {
    let content = std::fs::read_to_string(root.join("package.json")).ok()?;
    let manifest: serde_json::Value = serde_json::from_str(&content).ok()?;
    let field = manifest.get("packageManager")?.as_str()?;
    let name = field.split('@').next()?;

    MANAGERS
        .iter()
        .find(|(manager, _)| *manager == name)
        .map(|(manager, _)| manager.to_string())
}
