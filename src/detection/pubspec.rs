//! Dart vs Flutter disambiguation.
//!
//! `pubspec.yaml` marks both plain Dart and Flutter projects. A Flutter
//! project declares a top-level `flutter:` key; without it the project is
//! plain Dart. This is the only stack determination that reads file content
//! rather than just checking filenames.

use std::path::Path;

use crate::detection::descriptor::{DART, FLUTTER};

/// The shared Dart/Flutter marker filename.
pub const PUBSPEC: &str = "pubspec.yaml";

/// Resolve the Dart/Flutter pair for the pubspec at `root`, if one exists.
///
/// Returns `None` when there is no pubspec.yaml. An unreadable or malformed
/// pubspec resolves to "dart": its mere existence already confirms the stack,
/// and misclassifying a broken Flutter manifest as Dart is low-stakes.
pub fn classify(root: &Path) -> Option<&'static str> {
    let path = root.join(PUBSPEC);
    if !path.is_file() {
        return None;
    }

    let content = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(err) => {
            tracing::debug!("pubspec.yaml unreadable ({err}), treating as dart");
            return Some(DART);
        }
    };

    if has_flutter_key(&content) {
        Some(FLUTTER)
    } else {
        Some(DART)
    }
}

/// Check for a top-level `flutter:` key in pubspec content.
///
/// Parses the document as YAML first; when the document does not parse,
/// falls back to a line scan so a partially broken pubspec still classifies.
fn has_flutter_key(content: &str) -> bool {
    if let Ok(serde_yaml::Value::Mapping(map)) = serde_yaml::from_str::<serde_yaml::Value>(content)
    {
        return map.contains_key(serde_yaml::Value::String("flutter".to_string()));
    }

    content
        .lines()
        .any(|line| line.starts_with("flutter:"))
}
