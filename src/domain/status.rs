/// Transient, user-facing notice about a load or action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub level: StatusLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Success,
    Error,
}

impl Status {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), level: StatusLevel::Success }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), level: StatusLevel::Error }
    }

    pub fn is_error(&self) -> bool {
        self.level == StatusLevel::Error
    }
}
