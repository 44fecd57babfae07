//! Command-line interface for stackscan.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    ChangedArgs, Cli, Commands, CompletionsArgs, FiltersArgs, InfoArgs, PackageManagerArgs,
    StacksArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
