mod resource_fetcher;
mod status_sink;
mod workbook_reader;

pub use resource_fetcher::{FetchOutcome, ResourceFetcher};
pub use status_sink::StatusSink;
pub use workbook_reader::WorkbookReader;
