//! Technology stack detection.
//!
//! The heart of stackscan: a static per-stack descriptor table
//! ([`descriptor`]), a registry with lookups and config overrides
//! ([`registry`]), and detectors for whole repositories ([`project`]) and
//! version-control change-sets ([`changes`]). [`package_manager`] resolves
//! which manager governs a javascript project.

pub mod changes;
pub mod command_detection;
pub mod descriptor;
pub mod file_detection;
pub mod package_manager;
pub mod project;
pub mod pubspec;
pub mod registry;

pub use changes::detect_changed_stacks;
pub use descriptor::{builtin_descriptors, StackDescriptor};
pub use package_manager::detect_package_manager;
pub use project::StackDetector;
pub use registry::StackRegistry;
