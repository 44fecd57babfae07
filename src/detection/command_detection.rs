//! Command availability checks.
//!
//! Used as the least reliable signal in package manager resolution: a binary
//! on the current machine's PATH says something about the machine, not
//! necessarily about the project's canonical tooling.

use std::process::Command;

/// Check if a command runs successfully.
pub fn command_succeeds(command: &str) -> bool {
    let parts: Vec<&str> = command.split_whitespace().collect();
    if parts.is_empty() {
        return false;
    }

    Command::new(parts[0])
        .args(&parts[1..])
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}
