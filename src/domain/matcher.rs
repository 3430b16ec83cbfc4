//! Tester-name matching over assignment rows.

use crate::domain::normalize::normalize;
use crate::domain::{Assignment, AssignmentRow};

/// Wave a row must belong to for it to be offered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveFilter {
    label: String,
}

impl WaveFilter {
    pub const DEFAULT_LABEL: &'static str = "wave 1";

    pub fn new(label: &str) -> Self {
        Self { label: label.trim().to_lowercase() }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Trimmed, case-insensitive equality with the configured label.
    pub fn accepts(&self, wave: &str) -> bool {
        wave.trim().to_lowercase() == self.label
    }
}

impl Default for WaveFilter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LABEL)
    }
}

/// Rows whose normalized tester contains the normalized query and whose wave
/// passes `wave`, in sheet order.
pub fn find_assignments(query: &str, rows: &[AssignmentRow], wave: &WaveFilter) -> Vec<Assignment> {
    let needle = normalize(Some(query));

    rows.iter()
        .filter(|row| wave.accepts(&row.wave))
        .filter(|row| normalize(Some(&row.tester)).contains(&needle))
        .map(Assignment::from_row)
        .collect()
}
