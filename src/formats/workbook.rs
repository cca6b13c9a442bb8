//! Support for the xlsx workbook format.
//!
//! Binary parsing is delegated to calamine and writing to rust_xlsxwriter;
//! this module maps between worksheet cells and [`RowRecord`]s. Every sheet
//! starts with a header row naming the columns, and unknown columns are
//! ignored on read.

use std::path::Path;

use calamine::{Data, DataType, Reader, Xlsx, open_workbook};
use rust_xlsxwriter::Workbook;

use crate::{error::Error, record::RowRecord};

/// One worksheet: a name (by convention, a locale) and its decoded rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<RowRecord>,
}

/// A decoded workbook, sheets in file order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Format {
    pub sheets: Vec<Sheet>,
}

impl Format {
    /// Reads and decodes a workbook from disk.
    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let mut workbook: Xlsx<_> = open_workbook(path)?;
        let mut sheets = Vec::new();

        for name in workbook.sheet_names() {
            let range = workbook.worksheet_range(&name)?;
            let mut rows_iter = range.rows();

            let header: Vec<String> = match rows_iter.next() {
                Some(cells) => cells
                    .iter()
                    .map(|cell| cell.as_string().unwrap_or_default())
                    .collect(),
                None => {
                    sheets.push(Sheet {
                        name,
                        rows: Vec::new(),
                    });
                    continue;
                }
            };

            let rows = rows_iter
                .map(|cells| row_from_cells(&header, cells))
                .collect();
            sheets.push(Sheet { name, rows });
        }

        Ok(Format { sheets })
    }

    /// Writes the given sheets out as a workbook, fully replacing any
    /// existing file at the path.
    pub fn write_to<P: AsRef<Path>>(sheets: &[Sheet], path: P) -> Result<(), Error> {
        let mut workbook = Workbook::new();

        for sheet in sheets {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(sheet.name.as_str())?;

            for (col, title) in RowRecord::COLUMNS.iter().enumerate() {
                worksheet.write_string(0, col as u16, *title)?;
            }

            for (i, row) in sheet.rows.iter().enumerate() {
                let r = (i + 1) as u32;
                worksheet.write_number(r, 0, row.index as f64)?;
                worksheet.write_string(r, 1, row.id.as_str())?;
                worksheet.write_string(r, 2, row.datatype.as_str())?;
                worksheet.write_string(r, 3, row.source_locale.as_str())?;
                worksheet.write_string(r, 4, row.source.as_str())?;
                worksheet.write_string(r, 5, row.target_locale.as_str())?;
                worksheet.write_string(r, 6, row.target.as_str())?;
                worksheet.write_string(r, 7, row.key.as_str())?;
                worksheet.write_string(r, 8, row.comment.as_str())?;
            }
        }

        workbook.save(path.as_ref())?;
        Ok(())
    }
}

fn row_from_cells(header: &[String], cells: &[Data]) -> RowRecord {
    let mut record = RowRecord::default();

    for (i, title) in header.iter().enumerate() {
        let Some(cell) = cells.get(i) else { continue };
        if cell.is_empty() {
            continue;
        }
        match title.as_str() {
            "index" => {
                record.index = cell.as_f64().map(|f| f.max(0.0) as usize).unwrap_or(0);
            }
            "id" => record.id = cell_text(cell),
            "datatype" => record.datatype = cell_text(cell),
            "sourceLocale" => record.source_locale = cell_text(cell),
            "source" => record.source = cell_text(cell),
            "targetLocale" => record.target_locale = cell_text(cell),
            "target" => record.target = cell_text(cell),
            "key" => record.key = cell_text(cell),
            "comment" => record.comment = cell_text(cell),
            _ => {}
        }
    }

    record
}

fn cell_text(cell: &Data) -> String {
    cell.as_string().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> Vec<String> {
        RowRecord::COLUMNS.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_row_from_cells_maps_named_columns() {
        let cells = vec![
            Data::Float(2.0),
            Data::String("Settings".to_string()),
            Data::String("x-xlsx".to_string()),
            Data::String("en-US".to_string()),
            Data::String("Settings".to_string()),
            Data::String("ko".to_string()),
            Data::String("설정".to_string()),
            Data::Empty,
            Data::String("menu title".to_string()),
        ];
        let record = row_from_cells(&header(), &cells);
        assert_eq!(record.index, 2);
        assert_eq!(record.id, "Settings");
        assert_eq!(record.source, "Settings");
        assert_eq!(record.source_locale, "en-US");
        assert_eq!(record.target_locale, "ko");
        assert_eq!(record.target, "설정");
        assert_eq!(record.key, "");
        assert_eq!(record.comment, "menu title");
    }

    #[test]
    fn test_row_from_cells_short_row() {
        let cells = vec![Data::Float(0.0), Data::String("hello".to_string())];
        let record = row_from_cells(&header(), &cells);
        assert_eq!(record.id, "hello");
        assert_eq!(record.source, "");
    }

    #[test]
    fn test_row_from_cells_unknown_column_ignored() {
        let header = vec!["bogus".to_string(), "source".to_string()];
        let cells = vec![
            Data::String("ignored".to_string()),
            Data::String("Hello".to_string()),
        ];
        let record = row_from_cells(&header, &cells);
        assert_eq!(record.source, "Hello");
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");

        let rows = vec![
            RowRecord {
                index: 0,
                id: "Settings".to_string(),
                datatype: "x-xlsx".to_string(),
                source_locale: "en-US".to_string(),
                source: "Settings".to_string(),
                ..Default::default()
            },
            RowRecord {
                index: 1,
                id: "greeting".to_string(),
                datatype: "x-xlsx".to_string(),
                source_locale: "en-US".to_string(),
                source: "Hello there".to_string(),
                target_locale: "ko".to_string(),
                target: "안녕하세요".to_string(),
                key: "greeting".to_string(),
                comment: "shown at startup".to_string(),
            },
        ];
        let sheets = vec![Sheet {
            name: "ko".to_string(),
            rows: rows.clone(),
        }];

        Format::write_to(&sheets, &path).unwrap();
        let decoded = Format::read_from(&path).unwrap();

        assert_eq!(decoded.sheets.len(), 1);
        assert_eq!(decoded.sheets[0].name, "ko");
        assert_eq!(decoded.sheets[0].rows, rows);
    }

    #[test]
    fn test_read_missing_file_is_error() {
        assert!(Format::read_from("no/such/file.xlsx").is_err());
    }
}
