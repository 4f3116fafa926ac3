//! Excel workbook writer
//!
//! The workbook is serialized in memory, written to a temporary file next to
//! the destination and renamed into place, so a failed run never leaves a
//! half-written workbook (or clobbers a previous one).

use super::{persist_atomically, validate_sheets, Cell, Sheet, WorkbookWriter};
use crate::error::Result;
use log::{debug, info};
use rust_xlsxwriter::Workbook;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxWriter;

impl XlsxWriter {
    /// Serialize sheets to xlsx bytes
    pub fn to_buffer(&self, sheets: &[Sheet]) -> Result<Vec<u8>> {
        validate_sheets(sheets)?;

        let mut workbook = Workbook::new();
        for sheet in sheets {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(sheet.name.as_str())?;

            // validate_sheets bounds rows and columns to Excel's limits
            for (col, header) in sheet.headers.iter().enumerate() {
                worksheet.write_string(0, col as u16, header.as_str())?;
            }
            for (r, row) in sheet.rows.iter().enumerate() {
                let row_idx = (r + 1) as u32;
                for (col, cell) in row.iter().enumerate() {
                    match cell {
                        Cell::Text(s) => worksheet.write_string(row_idx, col as u16, s.as_str())?,
                        Cell::Number(n) => worksheet.write_number(row_idx, col as u16, *n)?,
                    };
                }
            }
            debug!("Sheet '{}': {} rows", sheet.name, sheet.rows.len());
        }

        Ok(workbook.save_to_buffer()?)
    }
}

impl WorkbookWriter for XlsxWriter {
    fn write_workbook(&self, path: &Path, sheets: &[Sheet]) -> Result<()> {
        let bytes = self.to_buffer(sheets)?;
        persist_atomically(path, &bytes)?;
        info!("Wrote {} sheets to {}", sheets.len(), path.display());
        Ok(())
    }
}
