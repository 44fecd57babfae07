//! The stack descriptor table and its lookups.
//!
//! A [`StackRegistry`] owns the descriptor set the detector works from. It
//! starts from the built-in table and can layer an explicit YAML overrides
//! file on top, merged by stack name. Nothing here reads ambient state: the
//! overrides path comes from the caller.
//!
//! All lookups treat an unknown stack name as "no metadata", never an error.
//! New stacks can land in an overrides file before every call site learns
//! about them.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::detection::descriptor::{builtin_descriptors, StackDescriptor};
use crate::error::{Result, StackScanError};

/// Registry of known stack descriptors.
#[derive(Debug, Clone)]
pub struct StackRegistry {
    descriptors: Vec<StackDescriptor>,
}

/// One stack entry in an overrides file. The stack name is the map key.
#[derive(Debug, Default, Deserialize)]
struct StackEntry {
    #[serde(default)]
    marker_files: Vec<String>,
    #[serde(default)]
    extensions: Vec<String>,
    #[serde(default)]
    exclude_dirs: Vec<String>,
    #[serde(default)]
    lock_files: Vec<String>,
}

/// Overrides file schema: a `stacks:` map of name to descriptor fields.
#[derive(Debug, Default, Deserialize)]
struct StackConfigFile {
    #[serde(default)]
    stacks: BTreeMap<String, StackEntry>,
}

impl Default for StackRegistry {
    fn default() -> Self {
        Self {
            descriptors: builtin_descriptors(),
        }
    }
}

impl StackRegistry {
    /// Registry with the built-in descriptor table only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with a YAML overrides file merged over the built-ins.
    ///
    /// An entry whose name matches a built-in stack replaces that stack's
    /// descriptor entirely; other entries add new stacks.
    pub fn with_overrides_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: StackConfigFile =
            serde_yaml::from_str(&content).map_err(|err| StackScanError::ConfigParseError {
                path: path.to_path_buf(),
                message: err.to_string(),
            })?;

        let mut registry = Self::new();
        for (name, entry) in config.stacks {
            tracing::debug!("stack override: {name}");
            registry.upsert(StackDescriptor {
                name,
                marker_files: entry.marker_files,
                extensions: entry.extensions,
                exclude_dirs: entry.exclude_dirs,
                lock_files: entry.lock_files,
            });
        }
        Ok(registry)
    }

    /// Convenience: registry for an optional overrides path.
    pub fn load(overrides: Option<&Path>) -> Result<Self> {
        match overrides {
            Some(path) => Self::with_overrides_file(path),
            None => Ok(Self::new()),
        }
    }

    fn upsert(&mut self, descriptor: StackDescriptor) {
        match self.descriptors.iter_mut().find(|d| d.name == descriptor.name) {
            Some(existing) => *existing = descriptor,
            None => self.descriptors.push(descriptor),
        }
    }

    /// All descriptors in table order.
    pub fn descriptors(&self) -> &[StackDescriptor] {
        &self.descriptors
    }

    /// Descriptor for a stack name, if known.
    pub fn get(&self, name: &str) -> Option<&StackDescriptor> {
        self.descriptors.iter().find(|d| d.name == name)
    }

    /// Source extensions for a stack. Unknown stack yields an empty list.
    pub fn extensions(&self, name: &str) -> Vec<String> {
        self.get(name).map(|d| d.extensions.clone()).unwrap_or_default()
    }

    /// Exclude directories for a stack. Unknown stack yields an empty list.
    pub fn exclude_dirs(&self, name: &str) -> Vec<String> {
        self.get(name).map(|d| d.exclude_dirs.clone()).unwrap_or_default()
    }

    /// Lock files for a stack. Unknown stack yields an empty list.
    pub fn lock_files(&self, name: &str) -> Vec<String> {
        self.get(name).map(|d| d.lock_files.clone()).unwrap_or_default()
    }
}
