//! Integration tests for the CLI binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn stackscan() -> Command {
    Command::new(cargo_bin("stackscan"))
}

#[test]
fn cli_shows_help() {
    stackscan()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("technology stack detection"));
}

#[test]
fn cli_shows_version() {
    stackscan()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn stacks_lists_detected_stacks() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("go.mod"), "module example\n").unwrap();
    fs::write(temp.path().join("package.json"), "{}").unwrap();

    stackscan()
        .args(["--project"])
        .arg(temp.path())
        .arg("stacks")
        .assert()
        .success()
        .stdout(predicate::str::contains("go"))
        .stdout(predicate::str::contains("javascript"));
}

#[test]
fn stacks_is_the_default_command() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("go.mod"), "module example\n").unwrap();

    stackscan()
        .arg("--project")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("go"));
}

#[test]
fn stacks_json_output() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("go.mod"), "module example\n").unwrap();

    stackscan()
        .arg("--project")
        .arg(temp.path())
        .args(["stacks", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"["go"]"#));
}

#[test]
fn stacks_fails_on_missing_root() {
    stackscan()
        .args(["--project", "/no/such/repository", "stacks"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not readable"));
}

#[test]
fn changed_reads_paths_from_stdin() {
    let temp = TempDir::new().unwrap();

    stackscan()
        .arg("--project")
        .arg(temp.path())
        .arg("changed")
        .write_stdin("src/main.go\nREADME.md\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("go"));
}

#[test]
fn changed_with_no_input_prints_nothing_in_quiet_mode() {
    let temp = TempDir::new().unwrap();

    stackscan()
        .arg("--project")
        .arg(temp.path())
        .args(["--quiet", "changed"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn info_prints_stack_metadata() {
    stackscan()
        .args(["info", "python"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".py"))
        .stdout(predicate::str::contains("__pycache__"));
}

#[test]
fn info_unknown_stack_succeeds() {
    stackscan()
        .args(["--quiet", "info", "cobol"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn filters_reports_combined_exclusions() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("package.json"), "{}").unwrap();
    fs::write(temp.path().join("requirements.txt"), "").unwrap();

    stackscan()
        .arg("--project")
        .arg(temp.path())
        .args(["filters", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("node_modules"))
        .stdout(predicate::str::contains("__pycache__"));
}

#[test]
fn package_manager_honors_lock_priority() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("bun.lockb"), "").unwrap();
    fs::write(temp.path().join("package-lock.json"), "{}").unwrap();

    stackscan()
        .arg("--project")
        .arg(temp.path())
        .arg("package-manager")
        .assert()
        .success()
        .stdout(predicate::str::contains("bun"));
}

#[test]
fn config_overrides_add_stacks() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Gemfile"), "source 'https://rubygems.org'\n").unwrap();
    let config = temp.path().join("stacks.yml");
    fs::write(
        &config,
        "stacks:\n  ruby:\n    marker_files: [Gemfile]\n    extensions: [\".rb\"]\n",
    )
    .unwrap();

    stackscan()
        .arg("--project")
        .arg(temp.path())
        .arg("--config")
        .arg(&config)
        .arg("stacks")
        .assert()
        .success()
        .stdout(predicate::str::contains("ruby"));
}

#[test]
fn malformed_config_fails_with_parse_error() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("stacks.yml");
    fs::write(&config, "stacks: [not, a, map]\n").unwrap();

    stackscan()
        .arg("--project")
        .arg(temp.path())
        .arg("--config")
        .arg(&config)
        .arg("stacks")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse stack config"));
}

#[test]
fn completions_generate_for_bash() {
    stackscan()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stackscan"));
}
