//! Changed command implementation.
//!
//! The `stackscan changed` command reports which stacks a change-set
//! touched. Paths come from the command line, or from stdin when none are
//! given, which pairs with `git diff --name-only | stackscan changed`.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::cli::args::ChangedArgs;
use crate::detection::{detect_changed_stacks, StackRegistry};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The changed command implementation.
pub struct ChangedCommand {
    project_root: PathBuf,
    registry: StackRegistry,
    args: ChangedArgs,
}

impl ChangedCommand {
    /// Create a new changed command.
    pub fn new(project_root: &Path, registry: StackRegistry, args: ChangedArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            registry,
            args,
        }
    }

    /// Changed paths from args, falling back to newline-separated stdin.
    fn changed_paths(&self) -> Result<Vec<String>> {
        if !self.args.paths.is_empty() {
            return Ok(self.args.paths.clone());
        }

        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}

impl Command for ChangedCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let paths = self.changed_paths()?;
        let stacks = detect_changed_stacks(&self.registry, &self.project_root, &paths);

        if self.args.json {
            ui.result(&serde_json::to_string(&stacks).map_err(anyhow::Error::from)?);
            return Ok(CommandResult::success());
        }

        if stacks.is_empty() {
            ui.message("No stacks touched.");
        }
        for stack in &stacks {
            ui.result(stack);
        }

        Ok(CommandResult::success())
    }
}
