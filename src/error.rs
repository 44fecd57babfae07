//! Error types for stackscan operations.
//!
//! The detector is a best-effort classifier: a missing marker file, an
//! unrecognized stack name, or an empty change-set are all valid negative
//! results, not errors. The only hard failure it surfaces is a repository
//! root that cannot be scanned at all, so callers can tell "no stacks found"
//! apart from "could not look".

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for stackscan operations.
#[derive(Debug, Error)]
pub enum StackScanError {
    /// The repository root does not exist or cannot be listed.
    #[error("Repository root is not readable: {path}")]
    RepositoryUnreadable { path: PathBuf },

    /// Failed to parse a stack overrides config file.
    #[error("Failed to parse stack config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for stackscan operations.
pub type Result<T> = std::result::Result<T, StackScanError>;
