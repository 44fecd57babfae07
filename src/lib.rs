//! Stackscan - technology stack detection for repositories and change-sets.
//!
//! Stackscan inspects a repository's file system and a set of changed file
//! paths, and answers which technology stacks are present, which stacks a
//! change touched, and which extensions, build directories, and lock files
//! matter for each stack. It is built to sit inside commit hooks and
//! documentation tooling that need to know what kind of project they are
//! looking at.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`detection`] - Stack descriptors, registry, and detectors
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```no_run
//! use stackscan::detection::StackDetector;
//!
//! let detector = StackDetector::new();
//! let stacks = detector.detect_project_stacks(std::path::Path::new("."))?;
//! for stack in &stacks {
//!     println!("{stack}");
//! }
//! # Ok::<(), stackscan::StackScanError>(())
//! ```

pub mod cli;
pub mod detection;
pub mod error;
pub mod ui;

pub use error::{Result, StackScanError};
