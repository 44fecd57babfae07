//! File-existence helpers for marker and lock file checks.

use std::path::Path;

/// Check if a file exists directly under the repository root.
pub fn file_exists(root: &Path, file: &str) -> bool {
    root.join(file).is_file()
}

/// Return the first of `files` that exists under the repository root.
pub fn any_file_exists(root: &Path, files: &[&str]) -> Option<String> {
    files
        .iter()
        .find(|f| root.join(f).is_file())
        .map(|f| f.to_string())
}
