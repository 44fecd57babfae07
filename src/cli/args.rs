//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Stackscan - technology stack detection for repositories and change-sets.
#[derive(Debug, Parser)]
#[command(name = "stackscan")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a stack overrides config file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to repository root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Detect technology stacks present in the repository (default)
    Stacks(StacksArgs),

    /// Detect stacks touched by a change-set
    Changed(ChangedArgs),

    /// Show a stack's extensions, exclude directories, and lock files
    Info(InfoArgs),

    /// Show the combined exclusion filter over all detected stacks
    Filters(FiltersArgs),

    /// Resolve the javascript package manager for the repository
    PackageManager(PackageManagerArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `stacks` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StacksArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `changed` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ChangedArgs {
    /// Changed file paths, repository-relative. With no paths given,
    /// newline-separated paths are read from stdin (pairs with
    /// `git diff --name-only`)
    pub paths: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `info` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InfoArgs {
    /// Stack name, e.g. "go" or "javascript"
    pub stack: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `filters` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FiltersArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `package-manager` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PackageManagerArgs {}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
