//! Workbook contents as plain string grids, independent of the file format.

/// One worksheet, row-major, every cell rendered as trimmed text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        Self { name: name.into(), rows }
    }

    /// Rows after the header keyed by header label; blank rows are skipped.
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        let header: &[String] = self.rows.first().map(Vec::as_slice).unwrap_or(&[]);
        self.rows
            .iter()
            .skip(1)
            .filter(|row| row.iter().any(|cell| !cell.is_empty()))
            .map(move |cells| Record { header, cells })
    }
}

/// A data row viewed through its sheet's header.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    header: &'a [String],
    cells: &'a [String],
}

impl Record<'_> {
    /// Cell under `column`, or `""` when the column or cell is missing.
    pub fn get(&self, column: &str) -> &str {
        self.header
            .iter()
            .position(|h| h.trim() == column)
            .and_then(|i| self.cells.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }
}
