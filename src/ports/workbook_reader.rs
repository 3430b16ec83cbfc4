//! Port for decoding spreadsheet bytes.

use crate::domain::{AppError, Workbook};

pub trait WorkbookReader: Sync {
    /// Decode every sheet of the workbook in `bytes`.
    fn read(&self, bytes: &[u8]) -> Result<Workbook, AppError>;
}
