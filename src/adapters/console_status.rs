use crate::domain::{Status, StatusLevel};
use crate::ports::StatusSink;

/// Prints status messages to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleStatus;

impl StatusSink for ConsoleStatus {
    fn show(&self, status: Status) {
        match status.level {
            StatusLevel::Success => eprintln!("✅ {}", status.message),
            StatusLevel::Error => eprintln!("❌ {}", status.message),
        }
    }
}
