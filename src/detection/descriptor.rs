//! Per-stack descriptor records.
//!
//! Each supported technology stack is described by a [`StackDescriptor`]:
//! which filenames at a repository root mark the stack as present, which
//! source extensions belong to it, which directories downstream scans should
//! skip, and which dependency lock files to keep out of narrative diffs.
//!
//! This is plain data on purpose. There is no per-stack behavior beyond
//! lookup, so a table beats a trait hierarchy here. The one exception, the
//! Dart/Flutter content check, lives in [`crate::detection::pubspec`].

use serde::{Deserialize, Serialize};

/// Stack name constants for the built-in table.
pub const JAVASCRIPT: &str = "javascript";
pub const GO: &str = "go";
pub const DART: &str = "dart";
pub const FLUTTER: &str = "flutter";
pub const PYTHON: &str = "python";

/// Static description of one technology stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackDescriptor {
    /// Stack identifier, e.g. "javascript" or "go".
    pub name: String,

    /// Filenames whose presence at the repository root marks this stack.
    /// Order matters for display; matching treats them as a set.
    #[serde(default)]
    pub marker_files: Vec<String>,

    /// Source file extensions, with leading dot (".go").
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Directory names to skip when scanning (build output, caches,
    /// vendored dependencies).
    #[serde(default)]
    pub exclude_dirs: Vec<String>,

    /// Dependency lock files to exclude from diff/documentation analysis.
    #[serde(default)]
    pub lock_files: Vec<String>,
}

impl StackDescriptor {
    /// True if `filename` is one of this stack's marker files.
    pub fn has_marker(&self, filename: &str) -> bool {
        self.marker_files.iter().any(|m| m == filename)
    }

    /// True if `path` ends with one of this stack's extensions.
    pub fn matches_extension(&self, path: &str) -> bool {
        self.extensions.iter().any(|ext| path.ends_with(ext.as_str()))
    }
}

fn descriptor(
    name: &str,
    marker_files: &[&str],
    extensions: &[&str],
    exclude_dirs: &[&str],
    lock_files: &[&str],
) -> StackDescriptor {
    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
    StackDescriptor {
        name: name.to_string(),
        marker_files: owned(marker_files),
        extensions: owned(extensions),
        exclude_dirs: owned(exclude_dirs),
        lock_files: owned(lock_files),
    }
}

/// The built-in stack table.
///
/// Dart and Flutter share the `pubspec.yaml` marker; project detection
/// resolves the pair to exactly one name via the pubspec content check.
pub fn builtin_descriptors() -> Vec<StackDescriptor> {
    vec![
        descriptor(
            JAVASCRIPT,
            &["package.json", "package-lock.json"],
            &[".js", ".jsx", ".ts", ".tsx", ".mjs", ".cjs"],
            &["node_modules", "dist", "build", "coverage", ".next", ".turbo"],
            &["package-lock.json", "yarn.lock", "pnpm-lock.yaml", "bun.lockb", "bun.lock"],
        ),
        descriptor(
            GO,
            &["go.mod", "go.sum"],
            &[".go"],
            &["vendor", "bin"],
            &["go.sum"],
        ),
        descriptor(
            DART,
            &["pubspec.yaml"],
            &[".dart"],
            &[".dart_tool", "build"],
            &["pubspec.lock"],
        ),
        descriptor(
            FLUTTER,
            &["pubspec.yaml"],
            &[".dart"],
            &[".dart_tool", "build", ".flutter-plugins-dependencies"],
            &["pubspec.lock"],
        ),
        descriptor(
            PYTHON,
            &["pyproject.toml", "requirements.txt", "setup.py"],
            &[".py", ".pyw", ".pyx", ".pyi"],
            &["__pycache__", ".venv", "venv", ".mypy_cache", ".pytest_cache", "dist"],
            &["poetry.lock", "Pipfile.lock", "uv.lock"],
        ),
    ]
}
