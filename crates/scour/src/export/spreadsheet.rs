//! Spreadsheet serialization of a cleaned table.

use rust_xlsxwriter::Workbook;

use crate::error::Result;
use crate::table::{Cell, Table};

/// Serialize a table to a single-sheet xlsx container.
///
/// Header row first, data rows in table order; numbers are written as
/// numbers so downstream tools see numeric cells, not text.
pub fn to_xlsx_bytes(table: &Table) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Cleaned")?;

    for (col, name) in table.columns.iter().enumerate() {
        sheet.write_string(0, col as u16, name)?;
    }

    for (row_idx, row) in table.rows.iter().enumerate() {
        let out_row = (row_idx + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            let col = col as u16;
            match cell {
                Cell::Text(s) => {
                    sheet.write_string(out_row, col, s)?;
                }
                Cell::Int(i) => {
                    sheet.write_number(out_row, col, *i as f64)?;
                }
                Cell::Float(f) => {
                    sheet.write_number(out_row, col, *f)?;
                }
                Cell::Missing => {}
            }
        }
    }

    let bytes = workbook.save_to_buffer()?;
    Ok(bytes)
}
