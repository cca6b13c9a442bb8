//! Core, format-agnostic types: the canonical [`Resource`] record and the
//! insertion-ordered [`ResourceSet`] container.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{error::Error, traits::Parser};

/// Datatype tag stamped on every resource produced by this plugin.
pub const DATATYPE: &str = "x-xlsx";

/// Fallback source locale used when no locale is declared anywhere.
pub const DEFAULT_SOURCE_LOCALE: &str = "zxx-XX";

/// One translatable unit: key, source text, optional translation, and the
/// bookkeeping needed to round-trip it through a workbook row.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Unique key within a (project, locale, datatype) scope. Derived from
    /// the unescaped source text unless explicitly authored.
    pub key: String,

    /// Cleaned, canonical source-language text.
    pub source: String,

    /// BCP-47-like locale tag of the source text.
    pub source_locale: String,

    /// Translated text; absent until translation occurs.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub target: Option<String>,

    /// Locale of the translated text; absent for source-only resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub target_locale: Option<String>,

    /// Tag identifying the owning file format.
    pub datatype: String,

    /// Originating file path, for traceability.
    pub path: String,

    /// Zero-based insertion order within one parse pass. Required for stable
    /// round-trip ordering since row iteration order must be preserved.
    pub index: usize,

    /// Lifecycle state; [`ResourceState::New`] at creation.
    pub state: ResourceState,

    /// Optional free-text annotation for translators.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub comment: Option<String>,
}

/// Lifecycle state of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceState {
    /// Freshly extracted, not yet translated.
    #[default]
    New,

    /// Translated but the source has changed since.
    NeedsReview,

    /// Translated and reviewed.
    Translated,
}

impl FromStr for ResourceState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NEW" => Ok(ResourceState::New),
            "NEEDS_REVIEW" => Ok(ResourceState::NeedsReview),
            "TRANSLATED" => Ok(ResourceState::Translated),
            _ => Err(format!("Unknown resource state: {}", s)),
        }
    }
}

/// Append-only, insertion-ordered collection of resources owned by one file
/// instance.
///
/// Duplicates are tolerated: adding the same resource twice appends a second
/// copy. The set is created with a default source locale that is backfilled
/// into resources added without one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSet {
    source_locale: String,
    resources: Vec<Resource>,
}

impl ResourceSet {
    /// Creates an empty set with the given default source locale. An empty
    /// locale falls back to [`DEFAULT_SOURCE_LOCALE`].
    pub fn new(source_locale: &str) -> Self {
        let source_locale = if source_locale.is_empty() {
            DEFAULT_SOURCE_LOCALE.to_string()
        } else {
            source_locale.to_string()
        };
        ResourceSet {
            source_locale,
            resources: Vec::new(),
        }
    }

    /// The default source locale of this set.
    pub fn source_locale(&self) -> &str {
        &self.source_locale
    }

    /// Appends a resource.
    ///
    /// Malformed resources (no key and no source) are rejected with a warning
    /// and the add is a no-op. A resource without a source locale gets the
    /// set's default. No deduplication is performed.
    pub fn add(&mut self, mut resource: Resource) {
        if resource.key.is_empty() && resource.source.is_empty() {
            warn!(path = %resource.path, "rejecting malformed resource with no key and no source");
            return;
        }
        if resource.source_locale.is_empty() {
            resource.source_locale = self.source_locale.clone();
        }
        self.resources.push(resource);
    }

    /// Appends every resource of another set, in its order.
    pub fn add_set(&mut self, other: &ResourceSet) {
        for resource in other.iter() {
            self.add(resource.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Resource> {
        self.resources.iter()
    }

    /// All resources, in insertion order.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Finds the first resource with the given source text.
    pub fn get_by_source(&self, source: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.source == source)
    }

    /// Finds every resource with the given key, in insertion order.
    pub fn get_by_key(&self, key: &str) -> Vec<&Resource> {
        self.resources.iter().filter(|r| r.key == key).collect()
    }
}

impl Parser for ResourceSet {
    /// Load a set from its JSON cache representation.
    fn from_reader<R: std::io::BufRead>(reader: R) -> Result<Self, Error> {
        serde_json::from_reader(reader).map_err(Error::Parse)
    }

    /// Write the set out as a JSON cache.
    fn to_writer<W: std::io::Write>(&self, mut writer: W) -> Result<(), Error> {
        serde_json::to_writer(&mut writer, self).map_err(Error::Parse)
    }
}
