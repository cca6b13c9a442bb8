//! The per-file localization unit.
//!
//! A [`LocFile`] is constructed by the host for one (path, locale) pair,
//! extracts resources from its source document into its own
//! [`ResourceSet`], and can emit resources back out as workbooks in two
//! modes: one workbook per locale, or one multi-sheet workbook with a sheet
//! per locale.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::Error;
use crate::formats::{AppinfoFormat, FormatType, Sheet, WorkbookFormat};
use crate::locale::ResolvedLocale;
use crate::project::ProjectContext;
use crate::record::{self, RowRecord};
use crate::traits::Parser;
use crate::types::{Resource, ResourceSet};

/// One source file being extracted from or emitted to.
///
/// Extraction is re-entrant but not idempotent: calling [`LocFile::extract`]
/// twice appends a second copy of every resource. The set is never cleared
/// implicitly.
pub struct LocFile {
    project: ProjectContext,
    path_name: Option<String>,
    locale: ResolvedLocale,
    format: FormatType,
    set: ResourceSet,
    resource_index: usize,
}

impl LocFile {
    /// Creates a file instance for the given path and requested locale. The
    /// locale is resolved to its likely minimal form eagerly.
    pub fn new(
        project: ProjectContext,
        path_name: Option<&str>,
        locale: &str,
        format: FormatType,
    ) -> Self {
        let set = ResourceSet::new(project.source_locale());
        LocFile {
            locale: ResolvedLocale::resolve(locale),
            path_name: path_name.map(str::to_string),
            project,
            format,
            set,
            resource_index: 0,
        }
    }

    /// The resolved locale of this file instance.
    pub fn locale(&self) -> &ResolvedLocale {
        &self.locale
    }

    /// The format this instance parses and emits.
    pub fn format(&self) -> FormatType {
        self.format
    }

    /// Extracts all localizable strings from the source file into the
    /// instance's translation set.
    ///
    /// A missing, unreadable, or malformed file degrades to an empty
    /// contribution with a warning; extraction never raises. With no path
    /// configured this is a silent no-op.
    pub fn extract(&mut self) {
        let Some(path_name) = self.path_name.clone() else {
            debug!("no path configured, nothing to extract");
            return;
        };
        let full = self.project.root().join(&path_name);
        debug!(path = %full.display(), "extracting strings");

        match self.format {
            FormatType::Appinfo => match AppinfoFormat::read_from(&full) {
                Ok(document) => self.parse_document(&document, &path_name),
                Err(err) => {
                    warn!(path = %full.display(), error = %err, "could not read file");
                }
            },
            FormatType::Workbook => match WorkbookFormat::read_from(&full) {
                Ok(workbook) => self.parse_rows(&workbook, &path_name),
                Err(err) => {
                    warn!(path = %full.display(), error = %err, "could not read file");
                }
            },
        }
    }

    /// Whole-document mode: walk the declared schema of the parsed
    /// descriptor and add one resource per accepted property.
    fn parse_document(&mut self, document: &AppinfoFormat, path_name: &str) {
        self.resource_index = 0;
        for (_name, value) in document.localizable_strings() {
            let resource = record::resource_from_property(
                value,
                self.project.source_locale(),
                path_name,
                self.resource_index,
            );
            self.resource_index += 1;
            self.set.add(resource);
        }
    }

    /// Row-sequence mode: every row of every sheet, in sheet order then row
    /// order.
    fn parse_rows(&mut self, workbook: &WorkbookFormat, path_name: &str) {
        self.resource_index = 0;
        for sheet in &workbook.sheets {
            for row in &sheet.rows {
                let resource = record::resource_from_row(row, path_name, self.resource_index);
                self.resource_index += 1;
                self.set.add(resource);
            }
        }
    }

    /// The set of resources found in this file so far.
    pub fn translation_set(&self) -> &ResourceSet {
        &self.set
    }

    /// Writes one workbook for one locale: a single sheet named by the
    /// locale, containing either the given resources or the instance's own
    /// set.
    ///
    /// Writer errors propagate; nothing is merged with pre-existing content.
    pub fn write(&self, resources: Option<&[Resource]>, locale: Option<&str>) -> Result<(), Error> {
        let resources = resources.unwrap_or_else(|| self.set.resources());
        let locale = locale.unwrap_or_else(|| self.locale.spec());

        let sheet = Sheet {
            name: locale.to_string(),
            rows: ordered_rows(resources.iter()),
        };
        let target = self.resolved_path(locale);
        debug!(path = %target.display(), locale, "writing workbook");
        WorkbookFormat::write_to(&[sheet], target)
    }

    /// Writes one multi-locale workbook: one sheet per target locale.
    ///
    /// With an explicit locale list, one sheet is produced per requested
    /// locale in list order (possibly empty). Otherwise locales are grouped
    /// in discovery order, and resources without a target locale fall under
    /// this instance's own locale.
    pub fn write_batch(
        &self,
        resources: Option<&[Resource]>,
        locales: Option<&[String]>,
    ) -> Result<(), Error> {
        let resources = resources.unwrap_or_else(|| self.set.resources());

        let groups: Vec<(String, Vec<&Resource>)> = match locales {
            Some(list) => list
                .iter()
                .map(|locale| {
                    let members = resources
                        .iter()
                        .filter(|r| r.target_locale.as_deref() == Some(locale.as_str()))
                        .collect();
                    (locale.clone(), members)
                })
                .collect(),
            None => {
                let mut groups: Vec<(String, Vec<&Resource>)> = Vec::new();
                for resource in resources {
                    let locale = resource
                        .target_locale
                        .clone()
                        .unwrap_or_else(|| self.locale.spec().to_string());
                    match groups.iter_mut().find(|(name, _)| *name == locale) {
                        Some((_, members)) => members.push(resource),
                        None => groups.push((locale, vec![resource])),
                    }
                }
                groups
            }
        };

        let sheets: Vec<Sheet> = groups
            .into_iter()
            .map(|(name, members)| Sheet {
                rows: ordered_rows(members.into_iter()),
                name,
            })
            .collect();

        let target = self.resolved_path(self.locale.spec());
        debug!(path = %target.display(), sheets = sheets.len(), "writing multi-locale workbook");
        WorkbookFormat::write_to(&sheets, target)
    }

    /// Resolves the output path. The literal `"."` placeholder (or no path
    /// at all) synthesizes a name from the project id and locale, placed in
    /// the configured resource directory under the project root.
    fn resolved_path(&self, locale: &str) -> PathBuf {
        let name = match self.path_name.as_deref() {
            None | Some(".") => self.format.default_file_name(self.project.id(), locale),
            Some(path) => path.to_string(),
        };
        let base = match self.project.resource_dir(&self.format.to_string()) {
            Some(dir) => self.project.root().join(dir),
            None => self.project.root().to_path_buf(),
        };
        base.join(name)
    }
}

/// Inverse-maps resources into rows, stable by original index.
fn ordered_rows<'a>(resources: impl Iterator<Item = &'a Resource>) -> Vec<RowRecord> {
    let mut rows: Vec<RowRecord> = resources.map(record::row_from_resource).collect();
    rows.sort_by_key(|row| row.index);
    rows
}
