//! The two supported container formats.
//!
//! This module re-exports the per-format types and provides the
//! [`FormatType`] enum that selects the input adapter for a file instance:
//! whole-document extraction for appinfo descriptors, row-sequence
//! extraction for workbooks.

pub mod appinfo;
pub mod workbook;

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

pub use appinfo::Format as AppinfoFormat;
pub use workbook::{Format as WorkbookFormat, Sheet};

use crate::Error;
use crate::types::DATATYPE;

/// The container formats this plugin understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatType {
    /// JSON appinfo descriptor: a fixed schema of localizable properties.
    Appinfo,
    /// Xlsx workbook: sheets of flat resource rows.
    Workbook,
}

impl Display for FormatType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatType::Appinfo => write!(f, "appinfo"),
            FormatType::Workbook => write!(f, "xlsx"),
        }
    }
}

impl FromStr for FormatType {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "appinfo" | "json" => Ok(FormatType::Appinfo),
            "xlsx" | "workbook" => Ok(FormatType::Workbook),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

impl FormatType {
    /// Returns the typical file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            FormatType::Appinfo => "json",
            FormatType::Workbook => "xlsx",
        }
    }

    /// Datatype tag shared by both formats of this plugin.
    pub fn datatype(&self) -> &'static str {
        DATATYPE
    }

    /// File name synthesized when the configured path is the `"."`
    /// placeholder. The workbook variant appends the extension, the
    /// descriptor variant does not.
    pub fn default_file_name(&self, project_id: &str, locale: &str) -> String {
        match self {
            FormatType::Workbook => format!("{}_{}.xlsx", project_id, locale),
            FormatType::Appinfo => format!("{}_{}", project_id, locale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_type_display() {
        assert_eq!(FormatType::Appinfo.to_string(), "appinfo");
        assert_eq!(FormatType::Workbook.to_string(), "xlsx");
    }

    #[test]
    fn test_format_type_from_str() {
        assert_eq!(FormatType::from_str("appinfo").unwrap(), FormatType::Appinfo);
        assert_eq!(FormatType::from_str("JSON").unwrap(), FormatType::Appinfo);
        assert_eq!(FormatType::from_str("xlsx").unwrap(), FormatType::Workbook);
        assert_eq!(
            FormatType::from_str("  workbook  ").unwrap(),
            FormatType::Workbook
        );
        assert!(FormatType::from_str("tsv").is_err());
        assert!(FormatType::from_str("").is_err());
    }

    #[test]
    fn test_format_type_extension() {
        assert_eq!(FormatType::Appinfo.extension(), "json");
        assert_eq!(FormatType::Workbook.extension(), "xlsx");
    }

    #[test]
    fn test_format_type_datatype() {
        assert_eq!(FormatType::Appinfo.datatype(), DATATYPE);
        assert_eq!(FormatType::Workbook.datatype(), DATATYPE);
    }

    #[test]
    fn test_default_file_name_divergence() {
        assert_eq!(
            FormatType::Workbook.default_file_name("sample", "ko"),
            "sample_ko.xlsx"
        );
        assert_eq!(
            FormatType::Appinfo.default_file_name("sample", "ko"),
            "sample_ko"
        );
    }
}
