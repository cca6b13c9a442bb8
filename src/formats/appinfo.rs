//! Support for the appinfo.json descriptor format.
//!
//! Extraction is whole-document and schema-driven: a fixed set of declared
//! localizable properties is checked against the parsed document, and a
//! property is accepted only when it is present, non-empty, and of the
//! declared JSON type. Anything else is skipped, not an error.

use std::io::BufRead;

use serde_json::{Map, Value};
use tracing::debug;

use crate::{error::Error, traits::Parser};

/// Expected JSON type of a declared schema property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
}

impl ValueKind {
    fn matches(&self, value: &Value) -> bool {
        match self {
            ValueKind::String => value.is_string(),
        }
    }
}

/// The declared schema: localizable descriptor properties and their types.
pub const SCHEMA: [(&str, ValueKind); 2] = [
    ("title", ValueKind::String),
    ("appDescription", ValueKind::String),
];

/// A parsed appinfo descriptor document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Format {
    pub document: Map<String, Value>,
}

impl Format {
    /// Iterates the declared schema in order and yields the properties that
    /// pass the presence, truthiness, and type checks. Skipped properties
    /// are logged at debug level.
    pub fn localizable_strings(&self) -> Vec<(&'static str, &str)> {
        SCHEMA
            .iter()
            .filter_map(|(name, kind)| match self.document.get(*name) {
                Some(value) if kind.matches(value) => {
                    let text = value.as_str().unwrap_or_default();
                    if text.is_empty() {
                        debug!(property = name, "skipping empty property");
                        None
                    } else {
                        Some((*name, text))
                    }
                }
                Some(_) => {
                    debug!(
                        property = name,
                        "skipping property that does not match the declared type"
                    );
                    None
                }
                None => {
                    debug!(property = name, "skipping absent property");
                    None
                }
            })
            .collect()
    }
}

impl Parser for Format {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let value: Value = serde_json::from_reader(reader)?;
        match value {
            Value::Object(document) => Ok(Format { document }),
            _ => Err(Error::InvalidResource(
                "appinfo document must be a JSON object".to_string(),
            )),
        }
    }

    fn to_writer<W: std::io::Write>(&self, mut writer: W) -> Result<(), Error> {
        serde_json::to_writer_pretty(&mut writer, &self.document).map_err(Error::Parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_declared_strings() {
        let document = Format::from_str(
            r#"{"title": "Settings", "appDescription": "System settings", "version": "1.0.0"}"#,
        )
        .unwrap();
        let strings = document.localizable_strings();
        assert_eq!(strings, vec![("title", "Settings"), ("appDescription", "System settings")]);
    }

    #[test]
    fn test_parse_skips_type_mismatch() {
        let document = Format::from_str(r#"{"title": 42, "appDescription": "ok"}"#).unwrap();
        let strings = document.localizable_strings();
        assert_eq!(strings, vec![("appDescription", "ok")]);
    }

    #[test]
    fn test_parse_skips_absent_and_empty() {
        let document = Format::from_str(r#"{"title": ""}"#).unwrap();
        assert!(document.localizable_strings().is_empty());
    }

    #[test]
    fn test_parse_rejects_non_object() {
        assert!(Format::from_str(r#"["not", "an", "object"]"#).is_err());
        assert!(Format::from_str("{ invalid json }").is_err());
    }

    #[test]
    fn test_write_round_trip() {
        let document =
            Format::from_str(r#"{"title": "Settings", "version": "1.0.0"}"#).unwrap();
        let mut buffer = Vec::new();
        document.to_writer(&mut buffer).unwrap();
        let reparsed = Format::from_bytes(&buffer).unwrap();
        assert_eq!(reparsed, document);
    }
}
