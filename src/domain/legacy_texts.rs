//! Tabular instruction texts from the workbook's texts sheet.
//!
//! Row 0 holds partners, row 1 methods, row 2 texts. Column `i` of each row
//! describes the same (partner, method) pairing; column 0 is a label column.

/// Three aligned rows of the texts sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyTextTable {
    rows: Vec<Vec<String>>,
}

impl LegacyTextTable {
    /// Build from raw sheet rows, padding every row to the widest one.
    pub fn from_rows(mut rows: Vec<Vec<String>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, String::new());
        }
        Self { rows }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// A usable table has partner, method, and text rows.
    pub fn is_populated(&self) -> bool {
        self.rows.len() >= 3
    }

    pub fn width(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    pub fn partners(&self) -> &[String] {
        self.row(0)
    }

    pub fn methods(&self) -> &[String] {
        self.row(1)
    }

    pub fn texts(&self) -> &[String] {
        self.row(2)
    }

    /// Text used when no column matches: the last non-empty cell of the text row.
    pub fn catch_all(&self) -> Option<&str> {
        self.texts().iter().rev().find(|cell| !cell.is_empty()).map(String::as_str)
    }

    fn row(&self, index: usize) -> &[String] {
        self.rows.get(index).map(Vec::as_slice).unwrap_or(&[])
    }
}
