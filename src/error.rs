//! All error types for the sheetloc crate.
//!
//! These are returned from the fallible surfaces (workbook reading and
//! writing, document parsing). Extraction itself swallows read failures and
//! degrades to an empty set; see `codec`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown format `{0}`")]
    UnknownFormat(String),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("workbook read error: {0}")]
    WorkbookRead(#[from] calamine::XlsxError),

    #[error("workbook write error: {0}")]
    WorkbookWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid resource: {0}")]
    InvalidResource(String),

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
}
