//! Assignment rows and legacy texts assembled from a workbook.

use crate::domain::{AppError, AssignmentRow, ColumnNames, LegacyTextTable, SheetNames, Workbook};

/// Everything read from the workbook in one load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub rows: Vec<AssignmentRow>,
    pub legacy_texts: LegacyTextTable,
}

impl Dataset {
    /// The assignments sheet is required; the texts sheet may be absent.
    pub fn from_workbook(
        workbook: &Workbook,
        sheets: &SheetNames,
        columns: &ColumnNames,
    ) -> Result<Self, AppError> {
        let assignments = workbook
            .sheet(&sheets.assignments)
            .ok_or_else(|| AppError::MissingSheet(sheets.assignments.clone()))?;

        let rows = assignments
            .records()
            .map(|record| AssignmentRow {
                tester: record.get(&columns.tester).to_string(),
                wave: record.get(&columns.wave).to_string(),
                partner: record.get(&columns.partner).to_string(),
                restaurant: record.get(&columns.restaurant).to_string(),
                address: record.get(&columns.address).to_string(),
                city: record.get(&columns.city).to_string(),
                method: record.get(&columns.method).to_string(),
            })
            .collect();

        let legacy_texts = workbook
            .sheet(&sheets.texts)
            .map(|sheet| LegacyTextTable::from_rows(sheet.rows.clone()))
            .unwrap_or_else(LegacyTextTable::empty);

        Ok(Self { rows, legacy_texts })
    }
}
