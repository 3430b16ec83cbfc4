use serde_json::Value;

use crate::domain::AppError;

/// Markup fragments rendered by a [`MarkupRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupTemplate {
    /// Toggleable titled block appended after the instruction body.
    Collapsible,
    /// Report form link with the "report sent" acknowledgment button.
    Report,
    /// Clickable list of matched assignments.
    Addresses,
    /// Detail panel for one picked assignment.
    Details,
}

impl MarkupTemplate {
    pub fn file_name(&self) -> &'static str {
        match self {
            MarkupTemplate::Collapsible => "collapsible.html",
            MarkupTemplate::Report => "report.html",
            MarkupTemplate::Addresses => "addresses.html",
            MarkupTemplate::Details => "details.html",
        }
    }
}

/// Trait for rendering markup fragments.
///
/// Implementations must HTML-escape context values unless the template marks
/// them safe.
pub trait MarkupRenderer {
    fn render(&self, template: MarkupTemplate, context: &Value) -> Result<String, AppError>;
}
