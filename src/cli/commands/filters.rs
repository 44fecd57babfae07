//! Filters command implementation.
//!
//! The `stackscan filters` command prints the combined exclusion filter
//! over every stack detected at the repository root: the union of exclude
//! directories and lock files, deduplicated. Downstream tooling feeds this
//! into glob patterns and diff path filters.

use std::path::{Path, PathBuf};

use crate::cli::args::FiltersArgs;
use crate::detection::{StackDetector, StackRegistry};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The filters command implementation.
pub struct FiltersCommand {
    project_root: PathBuf,
    registry: StackRegistry,
    args: FiltersArgs,
}

impl FiltersCommand {
    /// Create a new filters command.
    pub fn new(project_root: &Path, registry: StackRegistry, args: FiltersArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            registry,
            args,
        }
    }
}

impl Command for FiltersCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let detector = StackDetector::with_registry(self.registry.clone());
        let exclude_dirs = detector.all_exclude_dirs(&self.project_root)?;
        let lock_files = detector.all_lock_files(&self.project_root)?;

        if self.args.json {
            let value = serde_json::json!({
                "exclude_dirs": exclude_dirs,
                "lock_files": lock_files,
            });
            ui.result(&value.to_string());
            return Ok(CommandResult::success());
        }

        ui.message("Exclude directories:");
        for dir in &exclude_dirs {
            ui.result(dir);
        }
        ui.message("Lock files:");
        for lock in &lock_files {
            ui.result(lock);
        }

        Ok(CommandResult::success())
    }
}
