//! Integration tests for the public detection API.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use stackscan::detection::{
    detect_changed_stacks, detect_package_manager, StackDetector, StackRegistry,
};
use stackscan::StackScanError;
use tempfile::TempDir;

fn paths(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn go_mod_only_repository() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("go.mod"), "module example\n\ngo 1.21\n").unwrap();

    let detector = StackDetector::new();
    let stacks = detector.detect_project_stacks(temp.path()).unwrap();

    assert_eq!(stacks, BTreeSet::from(["go".to_string()]));
}

#[test]
fn flutter_key_selects_flutter_over_dart() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("pubspec.yaml"),
        "name: app\ndependencies:\n  cupertino_icons: ^1.0.0\nflutter:\n  uses-material-design: true\n",
    )
    .unwrap();

    let detector = StackDetector::new();
    let stacks = detector.detect_project_stacks(temp.path()).unwrap();

    assert_eq!(stacks, BTreeSet::from(["flutter".to_string()]));
}

#[test]
fn pubspec_without_flutter_key_selects_dart() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("pubspec.yaml"), "name: tool\n").unwrap();

    let detector = StackDetector::new();
    let stacks = detector.detect_project_stacks(temp.path()).unwrap();

    assert_eq!(stacks, BTreeSet::from(["dart".to_string()]));
}

#[test]
fn polyglot_repository_detects_every_stack() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("package.json"), "{}").unwrap();
    fs::write(temp.path().join("go.mod"), "module example\n").unwrap();
    fs::write(temp.path().join("pubspec.yaml"), "name: tool\n").unwrap();

    let detector = StackDetector::new();
    let stacks = detector.detect_project_stacks(temp.path()).unwrap();

    assert_eq!(
        stacks,
        BTreeSet::from([
            "dart".to_string(),
            "go".to_string(),
            "javascript".to_string()
        ])
    );
}

#[test]
fn empty_change_set_is_empty_for_any_repository() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("go.mod"), "module example\n").unwrap();
    let registry = StackRegistry::new();

    let stacks = detect_changed_stacks(&registry, temp.path(), &[]);

    assert!(stacks.is_empty());
}

#[test]
fn changed_go_source_and_changed_go_sum_both_flag_go() {
    let temp = TempDir::new().unwrap();
    let registry = StackRegistry::new();

    assert_eq!(
        detect_changed_stacks(&registry, temp.path(), &paths(&["src/main.go"])),
        vec!["go"]
    );
    // go.sum is excluded from narrative diffs, but marker-file detection and
    // diff-exclusion are independent concerns.
    assert_eq!(
        detect_changed_stacks(&registry, temp.path(), &paths(&["go.sum"])),
        vec!["go"]
    );
}

#[test]
fn unknown_stack_lookups_are_empty_not_errors() {
    let registry = StackRegistry::new();

    assert!(registry.extensions("nonexistent-stack").is_empty());
    assert!(registry.exclude_dirs("nonexistent-stack").is_empty());
    assert!(registry.lock_files("nonexistent-stack").is_empty());
}

#[test]
fn combined_excludes_union_javascript_and_python() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("package.json"), "{}").unwrap();
    fs::write(temp.path().join("setup.py"), "").unwrap();

    let detector = StackDetector::new();
    let dirs = detector.all_exclude_dirs(temp.path()).unwrap();

    let mut expected: BTreeSet<String> = detector
        .registry()
        .exclude_dirs("javascript")
        .into_iter()
        .collect();
    expected.extend(detector.registry().exclude_dirs("python"));

    assert_eq!(dirs, expected);
}

#[test]
fn bun_lock_beats_npm_lock() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("bun.lockb"), "").unwrap();
    fs::write(temp.path().join("package-lock.json"), "{}").unwrap();

    assert_eq!(detect_package_manager(temp.path()), "bun");
}

#[test]
fn project_detection_is_idempotent() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("pyproject.toml"), "[project]\nname = \"x\"\n").unwrap();
    fs::write(temp.path().join("go.mod"), "module example\n").unwrap();

    let detector = StackDetector::new();
    let first = detector.detect_project_stacks(temp.path()).unwrap();
    let second = detector.detect_project_stacks(temp.path()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn requirements_txt_only_repository() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("requirements.txt"), "flask\n").unwrap();

    let detector = StackDetector::new();
    let stacks = detector.detect_project_stacks(temp.path()).unwrap();

    assert_eq!(stacks, BTreeSet::from(["python".to_string()]));
    assert_eq!(
        detector.registry().extensions("python"),
        vec![".py", ".pyw", ".pyx", ".pyi"]
    );
}

#[test]
fn unreadable_root_is_distinguishable_from_empty() {
    let detector = StackDetector::new();

    let err = detector
        .detect_project_stacks(Path::new("/no/such/repository"))
        .unwrap_err();
    assert!(matches!(err, StackScanError::RepositoryUnreadable { .. }));

    let temp = TempDir::new().unwrap();
    assert!(detector.detect_project_stacks(temp.path()).unwrap().is_empty());
}

#[test]
fn overrides_extend_changed_detection() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("stacks.yml");
    fs::write(
        &config,
        r#"
stacks:
  ruby:
    marker_files: [Gemfile]
    extensions: [".rb"]
    exclude_dirs: [vendor]
    lock_files: [Gemfile.lock]
"#,
    )
    .unwrap();

    let registry = StackRegistry::with_overrides_file(&config).unwrap();
    let stacks = detect_changed_stacks(&registry, temp.path(), &paths(&["app/models/user.rb"]));

    assert_eq!(stacks, vec!["ruby"]);
}
