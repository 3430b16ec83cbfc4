//! Port for fetching dataset files by URL.

use url::Url;

use crate::domain::AppError;

/// Body of a successful fetch, or why there is none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Success status with the response body.
    Found(Vec<u8>),
    /// The server answered with a non-success status.
    Missing { status: u16 },
}

/// Port for reading remote resources.
///
/// `Sync` so the text bank and workbook can be fetched from scoped threads.
pub trait ResourceFetcher: Sync {
    /// Transport failures are errors; non-success statuses are [`FetchOutcome::Missing`].
    fn fetch(&self, url: &Url) -> Result<FetchOutcome, AppError>;
}
