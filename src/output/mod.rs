//! Report output: workbook writers and forecast plots

mod plot;
mod xlsx;

pub use plot::{CsvPlotExport, NoPlot, SeriesPlot};
pub use xlsx::XlsxWriter;

use crate::error::{AlmError, Result};
use std::collections::HashSet;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Excel limits
const MAX_SHEET_NAME_LEN: usize = 31;
const MAX_COLUMNS: usize = 16_384;
const MAX_ROWS: usize = 1_048_576;
const INVALID_NAME_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// A single worksheet value
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }
}

/// A named table: one header row followed by data rows
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, headers: &[&str], rows: Vec<Vec<Cell>>) -> Self {
        Self {
            name: name.into(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }
}

/// Serializes an ordered set of sheets to a workbook file.
///
/// Implementations must preserve sheet, column and row order, write numbers
/// as numbers, and leave no partial file behind on failure.
pub trait WorkbookWriter {
    fn write_workbook(&self, path: &Path, sheets: &[Sheet]) -> Result<()>;
}

/// Check names and shapes before anything is written
pub fn validate_sheets(sheets: &[Sheet]) -> Result<()> {
    if sheets.is_empty() {
        return Err(AlmError::data("workbook has no sheets"));
    }

    let mut seen = HashSet::new();
    for sheet in sheets {
        let name = sheet.name.as_str();
        if name.is_empty() || name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(AlmError::data(format!(
                "sheet name '{}' must be 1 to {} characters",
                name, MAX_SHEET_NAME_LEN
            )));
        }
        if name.contains(&INVALID_NAME_CHARS[..]) {
            return Err(AlmError::data(format!(
                "sheet name '{}' contains a character Excel does not allow",
                name
            )));
        }
        if !seen.insert(name.to_lowercase()) {
            return Err(AlmError::data(format!("duplicate sheet name '{}'", name)));
        }

        if sheet.headers.is_empty() || sheet.headers.len() > MAX_COLUMNS {
            return Err(AlmError::data(format!(
                "sheet '{}' must have 1 to {} columns",
                name, MAX_COLUMNS
            )));
        }
        // Header row takes one row
        if sheet.rows.len() >= MAX_ROWS {
            return Err(AlmError::data(format!("sheet '{}' has too many rows", name)));
        }
        if let Some((i, row)) = sheet
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != sheet.headers.len())
        {
            return Err(AlmError::data(format!(
                "sheet '{}' row {} has {} cells, expected {}",
                name,
                i + 1,
                row.len(),
                sheet.headers.len()
            )));
        }
    }

    Ok(())
}

/// Write `bytes` to a temporary file in the destination directory, then rename over `path`
pub(crate) fn persist_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| AlmError::io(dir, e))?;
    tmp.write_all(bytes).map_err(|e| AlmError::io(path, e))?;
    tmp.as_file().sync_all().map_err(|e| AlmError::io(path, e))?;
    tmp.persist(path).map_err(|e| AlmError::io(path, e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(name: &str) -> Sheet {
        Sheet::new(name, &["A", "B"], vec![vec![Cell::text("x"), Cell::Number(1.0)]])
    }

    #[test]
    fn test_valid_sheets() {
        assert!(validate_sheets(&[sheet("Assets"), sheet("Risk Assessment")]).is_ok());
    }

    #[test]
    fn test_rejects_bad_names() {
        assert!(validate_sheets(&[]).is_err());
        assert!(validate_sheets(&[sheet("")]).is_err());
        assert!(validate_sheets(&[sheet("a name that is far too long for excel")]).is_err());
        assert!(validate_sheets(&[sheet("Q1/Q2")]).is_err());
        assert!(validate_sheets(&[sheet("Assets"), sheet("ASSETS")]).is_err());
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let mut s = sheet("Assets");
        s.rows.push(vec![Cell::Number(2.0)]);
        let err = validate_sheets(&[s]).unwrap_err();
        assert!(err.to_string().contains("row 2"));
    }
}
