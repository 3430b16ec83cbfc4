//! Port for transient user-facing status messages.

use crate::domain::Status;

pub trait StatusSink {
    fn show(&self, status: Status);
}

