//! Package-manager command implementation.
//!
//! The `stackscan package-manager` command prints the resolved javascript
//! package manager for the repository ("bun", "pnpm", "yarn", or "npm").

use std::path::{Path, PathBuf};

use crate::cli::args::PackageManagerArgs;
use crate::detection::detect_package_manager;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The package-manager command implementation.
pub struct PackageManagerCommand {
    project_root: PathBuf,
}

impl PackageManagerCommand {
    /// Create a new package-manager command.
    pub fn new(project_root: &Path, _args: PackageManagerArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
        }
    }
}

impl Command for PackageManagerCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let manager = detect_package_manager(&self.project_root);
        ui.result(&manager);
        Ok(CommandResult::success())
    }
}
