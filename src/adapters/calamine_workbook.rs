//! Workbook reader implementation using calamine.

use std::io::Cursor;

use calamine::{DataType, Range, Reader, Xlsx, open_workbook_from_rs};

use crate::domain::{AppError, Sheet, Workbook};
use crate::ports::WorkbookReader;

/// Reads `.xlsx` workbooks from memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalamineWorkbookReader;

impl WorkbookReader for CalamineWorkbookReader {
    fn read(&self, bytes: &[u8]) -> Result<Workbook, AppError> {
        let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))
            .map_err(|e| AppError::parse_error("workbook", e))?;

        let mut sheets = Vec::new();
        for name in workbook.sheet_names().to_owned() {
            let range = match workbook.worksheet_range(&name) {
                Some(range) => range.map_err(|e| AppError::parse_error("workbook", e))?,
                None => continue,
            };
            sheets.push(Sheet::new(name, anchored_rows(&range)));
        }

        Ok(Workbook { sheets })
    }
}

/// Rows positioned from A1; calamine trims leading empty rows and columns.
fn anchored_rows(range: &Range<DataType>) -> Vec<Vec<String>> {
    let (first_row, first_col) = range.start().unwrap_or((0, 0));

    let mut rows: Vec<Vec<String>> = vec![Vec::new(); first_row as usize];
    for row in range.rows() {
        let mut cells = vec![String::new(); first_col as usize];
        cells.extend(row.iter().map(cell_to_string));
        rows.push(cells);
    }
    rows
}

fn cell_to_string(cell: &DataType) -> String {
    match cell {
        DataType::Empty => String::new(),
        _ => cell.to_string().trim().to_string(),
    }
}
