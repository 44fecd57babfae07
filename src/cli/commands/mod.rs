//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed by [`CommandDispatcher`], which also builds the descriptor
//! registry once so `--config` handling stays in one place.

pub mod changed;
pub mod completions;
pub mod dispatcher;
pub mod filters;
pub mod info;
pub mod package_manager;
pub mod stacks;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
