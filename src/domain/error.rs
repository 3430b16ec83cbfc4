use std::io;

use thiserror::Error;

/// Library-wide error type for wavecheck operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Data source is not reachable over a network protocol.
    #[error("Unsupported source scheme '{scheme}': serve the data over http:// or https://")]
    Protocol { scheme: String },

    /// No workbook candidate answered with a success status.
    #[error("No workbook found at any of: {}", tried.join(", "))]
    DatasetNotFound { tried: Vec<String> },

    /// Required sheet is absent from the workbook.
    #[error("Workbook has no sheet named '{0}'")]
    MissingSheet(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    Parse { what: String, details: String },

    /// HTTP transport failure.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Search was attempted without a name.
    #[error("Enter a full name to search for")]
    EmptyQuery,

    /// No assignment matched the tester name.
    #[error("No addresses found for '{0}' in this wave")]
    NoAssignments(String),

    /// Requested list position does not exist.
    #[error("Pick {pick} is out of range: {available} assignment(s) found")]
    PickOutOfRange { pick: usize, available: usize },

    /// Markup template failed to render.
    #[error("Failed to render '{template}': {reason}")]
    Render { template: String, reason: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn parse_error(what: &str, details: impl std::fmt::Display) -> Self {
        AppError::Parse { what: what.to_string(), details: details.to_string() }
    }
}
