//! Stacks command implementation.
//!
//! The `stackscan stacks` command prints the stacks detected at the
//! repository root, one per line, or as a JSON array with `--json`.

use std::path::{Path, PathBuf};

use crate::cli::args::StacksArgs;
use crate::detection::{StackDetector, StackRegistry};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The stacks command implementation.
pub struct StacksCommand {
    project_root: PathBuf,
    registry: StackRegistry,
    args: StacksArgs,
}

impl StacksCommand {
    /// Create a new stacks command.
    pub fn new(project_root: &Path, registry: StackRegistry, args: StacksArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            registry,
            args,
        }
    }
}

impl Command for StacksCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let detector = StackDetector::with_registry(self.registry.clone());
        let stacks = detector.detect_project_stacks(&self.project_root)?;

        if self.args.json {
            let names: Vec<&String> = stacks.iter().collect();
            ui.result(&serde_json::to_string(&names).map_err(anyhow::Error::from)?);
            return Ok(CommandResult::success());
        }

        if stacks.is_empty() {
            ui.message("No stacks detected.");
        }
        for stack in &stacks {
            ui.result(stack);
        }

        Ok(CommandResult::success())
    }
}
