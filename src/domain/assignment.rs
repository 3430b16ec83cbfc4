//! Assignment rows read from the workbook and the records derived from them.

use serde::Serialize;

/// Separator placed between the parts of [`Assignment::display`].
pub const DISPLAY_SEPARATOR: &str = " → ";

/// One row of the assignments sheet. Missing cells are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentRow {
    pub tester: String,
    pub wave: String,
    pub partner: String,
    pub restaurant: String,
    pub address: String,
    pub city: String,
    pub method: String,
}

/// A matched visit, ready for listing and instruction lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub partner: String,
    pub restaurant: String,
    pub address: String,
    pub city: String,
    pub method: String,
    display: String,
}

impl Assignment {
    pub fn from_row(row: &AssignmentRow) -> Self {
        let display = [&row.partner, &row.restaurant, &row.address, &row.method]
            .map(String::as_str)
            .join(DISPLAY_SEPARATOR);

        Self {
            partner: row.partner.clone(),
            restaurant: row.restaurant.clone(),
            address: row.address.clone(),
            city: row.city.clone(),
            method: row.method.clone(),
            display,
        }
    }

    /// `partner → restaurant → address → method`.
    pub fn display(&self) -> &str {
        &self.display
    }
}
