//! File-type registry: extension recognition, per-file construction, and
//! cross-file aggregation of translation sets.
//!
//! Thin by design; the host orchestrator drives it. Aggregation happens
//! after each file's extraction completes, never concurrently, and a file
//! instance's own set is only ever read from here.

use tracing::debug;

use crate::codec::LocFile;
use crate::formats::FormatType;
use crate::project::ProjectContext;
use crate::types::{DATATYPE, ResourceSet};

/// Registry for one file type within one project.
pub struct FileTypeRegistry {
    project: ProjectContext,
    format: FormatType,
    extracted: ResourceSet,
    new_resources: ResourceSet,
    pseudo: ResourceSet,
}

impl FileTypeRegistry {
    pub fn new(project: ProjectContext, format: FormatType) -> Self {
        let locale = project.source_locale().to_string();
        FileTypeRegistry {
            project,
            format,
            extracted: ResourceSet::new(&locale),
            new_resources: ResourceSet::new(&locale),
            pseudo: ResourceSet::new(&locale),
        }
    }

    /// Human-readable name of this file type.
    pub fn name(&self) -> &'static str {
        match self.format {
            FormatType::Workbook => "Xlsx File Type",
            FormatType::Appinfo => "Appinfo File Type",
        }
    }

    /// Returns true if the given path is handled by this file type.
    pub fn handles(&self, path_name: &str) -> bool {
        debug!(path = path_name, "handles?");
        if path_name.is_empty() {
            return false;
        }
        let handled = match self.format {
            FormatType::Workbook => path_name.len() > 5 && path_name.ends_with(".xlsx"),
            FormatType::Appinfo => {
                path_name == "appinfo.json" || path_name.ends_with("/appinfo.json")
            }
        };
        debug!(handled, path = path_name, "handles");
        handled
    }

    /// File name extensions this file type can process.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self.format {
            FormatType::Workbook => &[".xlsx"],
            FormatType::Appinfo => &[".json"],
        }
    }

    pub fn datatype(&self) -> &'static str {
        DATATYPE
    }

    /// Constructs a file instance for a path within this project.
    pub fn new_file(&self, path_name: &str, locale: &str) -> LocFile {
        LocFile::new(self.project.clone(), Some(path_name), locale, self.format)
    }

    /// Adds the contents of one file's translation set to the aggregated
    /// extracted resources for this type.
    pub fn add_set(&mut self, set: &ResourceSet) {
        self.extracted.add_set(set);
    }

    /// All extracted resources across every file of this type.
    pub fn extracted(&self) -> &ResourceSet {
        &self.extracted
    }

    /// All new resources across every file of this type.
    pub fn new_resources(&self) -> &ResourceSet {
        &self.new_resources
    }

    /// All pseudo-localized resources across every file of this type.
    pub fn pseudo(&self) -> &ResourceSet {
        &self.pseudo
    }
}
