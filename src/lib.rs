#![forbid(unsafe_code)]
//! Localization string extraction and emission for appinfo descriptors and
//! xlsx workbooks.
//!
//! Invoked by a host localization orchestrator: it supplies a
//! [`ProjectContext`], constructs one [`LocFile`] per (path, locale) pair,
//! extracts resources into per-file [`ResourceSet`]s, and writes translated
//! resources back out as workbooks grouped per locale.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sheetloc::{FormatType, LocFile, ProjectContext};
//!
//! let project = ProjectContext::new("sample", "en-US", "./project");
//! let mut file = LocFile::new(project, Some("ko-KR.xlsx"), "ko-KR", FormatType::Workbook);
//!
//! // A missing or unreadable file degrades to an empty set, never an error.
//! file.extract();
//! let set = file.translation_set();
//!
//! // One workbook, one sheet named by the locale.
//! file.write(None, None)?;
//! # Ok::<(), sheetloc::Error>(())
//! ```
//!
//! # Pipeline
//!
//! - **Normalizer** ([`normalize`]): pure unescape/clean functions shared by
//!   both pipelines; resource keys use the unescaped (never
//!   whitespace-collapsed) text so repeated extractions produce identical
//!   keys.
//! - **RecordMapper** ([`record`]): forward (row/property → [`Resource`])
//!   and inverse ([`Resource`] → row) mapping.
//! - **Extractor/Emitter** ([`codec`]): per-file orchestration over the two
//!   input adapters, with soft-failing I/O on the extraction side.
//! - **Registry** ([`registry`]): extension recognition and cross-file
//!   aggregation.

pub mod codec;
pub mod error;
pub mod formats;
pub mod locale;
pub mod normalize;
pub mod project;
pub mod record;
pub mod registry;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    codec::LocFile,
    error::Error,
    formats::FormatType,
    locale::ResolvedLocale,
    project::ProjectContext,
    registry::FileTypeRegistry,
    types::{DATATYPE, DEFAULT_SOURCE_LOCALE, Resource, ResourceSet, ResourceState},
};
