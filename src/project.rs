//! The host-facing project context.
//!
//! The orchestrator provides one of these per project; file instances only
//! read from it. This is the narrow, explicit replacement for the loosely
//! specified project object of older plugin hosts.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Project-level configuration consumed by file instances and the registry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectContext {
    id: String,
    source_locale: String,
    root: PathBuf,
    resource_dirs: HashMap<String, String>,
}

impl ProjectContext {
    pub fn new(id: &str, source_locale: &str, root: impl Into<PathBuf>) -> Self {
        ProjectContext {
            id: id.to_string(),
            source_locale: source_locale.to_string(),
            root: root.into(),
            resource_dirs: HashMap::new(),
        }
    }

    /// Registers the resource output directory for a format name.
    pub fn with_resource_dir(mut self, format: &str, dir: &str) -> Self {
        self.resource_dirs.insert(format.to_string(), dir.to_string());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source_locale(&self) -> &str {
        &self.source_locale
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The configured resource directory for a format, if any.
    pub fn resource_dir(&self, format: &str) -> Option<&str> {
        self.resource_dirs.get(format).map(String::as_str)
    }
}
