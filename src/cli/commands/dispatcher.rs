//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, StacksArgs};
use crate::detection::StackRegistry;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, writing output through `ui`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given repository root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the repository root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// The descriptor registry is built once here, from the built-in table
    /// plus the explicit `--config` overrides file when given. Config errors
    /// surface before any detection runs.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = StackRegistry::load(cli.config.as_deref())?;

        match &cli.command {
            Some(Commands::Stacks(args)) => {
                let cmd =
                    super::stacks::StacksCommand::new(&self.project_root, registry, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Changed(args)) => {
                let cmd =
                    super::changed::ChangedCommand::new(&self.project_root, registry, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Info(args)) => {
                let cmd = super::info::InfoCommand::new(registry, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Filters(args)) => {
                let cmd =
                    super::filters::FiltersCommand::new(&self.project_root, registry, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::PackageManager(args)) => {
                let cmd = super::package_manager::PackageManagerCommand::new(
                    &self.project_root,
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to stack detection
                let cmd = super::stacks::StacksCommand::new(
                    &self.project_root,
                    registry,
                    StacksArgs::default(),
                );
                cmd.execute(ui)
            }
        }
    }
}
