pub mod config;
pub mod format;
pub mod normalize;
pub mod resolver;

mod assignment;
mod dataset;
mod error;
mod legacy_texts;
mod matcher;
mod status;
mod text_bank;
mod workbook;

pub use assignment::{Assignment, AssignmentRow, DISPLAY_SEPARATOR};
pub use config::{ColumnNames, LookupConfig, PlaceholderConfig, SheetNames, SourceConfig};
pub use dataset::Dataset;
pub use error::AppError;
pub use legacy_texts::LegacyTextTable;
pub use matcher::{WaveFilter, find_assignments};
pub use normalize::normalize;
pub use resolver::{TextResult, resolve_text};
pub use status::{Status, StatusLevel};
pub use text_bank::{CollapsibleSection, GeneralTemplate, SpecificText, Templates, TextBank};
pub use workbook::{Record, Sheet, Workbook};
