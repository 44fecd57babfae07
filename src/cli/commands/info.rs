//! Info command implementation.
//!
//! The `stackscan info <stack>` command prints a stack's extensions,
//! exclude directories, and lock files. An unknown stack prints empty
//! sections and still succeeds: callers treat "unknown stack" as
//! "no metadata".

use crate::cli::args::InfoArgs;
use crate::detection::StackRegistry;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The info command implementation.
pub struct InfoCommand {
    registry: StackRegistry,
    args: InfoArgs,
}

impl InfoCommand {
    /// Create a new info command.
    pub fn new(registry: StackRegistry, args: InfoArgs) -> Self {
        Self { registry, args }
    }
}

impl Command for InfoCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let name = &self.args.stack;
        let extensions = self.registry.extensions(name);
        let exclude_dirs = self.registry.exclude_dirs(name);
        let lock_files = self.registry.lock_files(name);

        if self.args.json {
            let value = serde_json::json!({
                "stack": name,
                "extensions": extensions,
                "exclude_dirs": exclude_dirs,
                "lock_files": lock_files,
            });
            ui.result(&value.to_string());
            return Ok(CommandResult::success());
        }

        if self.registry.get(name).is_none() {
            ui.message(&format!("Unknown stack '{name}', no metadata."));
        }

        ui.message("Extensions:");
        for ext in &extensions {
            ui.result(ext);
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
