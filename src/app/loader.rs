//! Fetching and decoding of the workbook and text bank.

use std::thread;

use tracing::debug;
use url::Url;

use crate::domain::{AppError, Dataset, LookupConfig, TextBank};
use crate::ports::{FetchOutcome, ResourceFetcher, WorkbookReader};

/// Results of one load pass; the two sources fail independently.
#[derive(Debug)]
pub struct SourceLoad {
    pub dataset: Result<Dataset, AppError>,
    /// `None` when the text bank was not requested.
    pub text_bank: Option<Result<TextBank, AppError>>,
}

/// Fetch the workbook and, when `with_text_bank` is set, the text bank in parallel.
///
/// Fails fast, before any fetch, when the base URL is not http(s).
pub fn load_sources<F, W>(
    config: &LookupConfig,
    fetcher: &F,
    reader: &W,
    with_text_bank: bool,
) -> Result<SourceLoad, AppError>
where
    F: ResourceFetcher,
    W: WorkbookReader,
{
    ensure_network_scheme(&config.source.base_url)?;

    let load = thread::scope(|scope| {
        let bank = with_text_bank.then(|| scope.spawn(|| fetch_text_bank(config, fetcher)));

        let dataset = fetch_workbook(config, fetcher)
            .and_then(|bytes| reader.read(&bytes))
            .and_then(|workbook| {
                debug!(sheets = ?workbook.sheet_names(), "workbook decoded");
                Dataset::from_workbook(&workbook, &config.sheets, &config.columns)
            });

        let text_bank = bank.map(|handle| {
            handle
                .join()
                .unwrap_or_else(|_| Err(AppError::Http("text bank fetch panicked".to_string())))
        });

        SourceLoad { dataset, text_bank }
    });

    Ok(load)
}

/// Fetch and parse the text bank on its own.
pub fn fetch_text_bank<F: ResourceFetcher>(
    config: &LookupConfig,
    fetcher: &F,
) -> Result<TextBank, AppError> {
    let url = source_url(&config.source.base_url, &config.source.text_bank)?;

    match fetcher.fetch(&url)? {
        FetchOutcome::Found(bytes) => TextBank::from_json(&bytes),
        FetchOutcome::Missing { status } => {
            Err(AppError::Http(format!("{} answered with status {}", url, status)))
        }
    }
}

/// First workbook candidate that answers with a success status.
fn fetch_workbook<F: ResourceFetcher>(
    config: &LookupConfig,
    fetcher: &F,
) -> Result<Vec<u8>, AppError> {
    let mut tried = Vec::with_capacity(config.source.workbook_candidates.len());

    for candidate in &config.source.workbook_candidates {
        let url = match source_url(&config.source.base_url, candidate) {
            Ok(url) => url,
            Err(err) => {
                debug!(candidate = %candidate, error = %err, "skipping workbook candidate");
                tried.push(candidate.clone());
                continue;
            }
        };

        match fetcher.fetch(&url) {
            Ok(FetchOutcome::Found(bytes)) => {
                debug!(url = %url, bytes = bytes.len(), "workbook found");
                return Ok(bytes);
            }
            Ok(FetchOutcome::Missing { status }) => {
                debug!(url = %url, status, "workbook candidate missing");
            }
            Err(err) => {
                debug!(url = %url, error = %err, "workbook candidate failed");
            }
        }
        tried.push(url.to_string());
    }

    Err(AppError::DatasetNotFound { tried })
}

/// Resolve `path` against `base`, percent-encoding as needed.
pub fn source_url(base: &Url, path: &str) -> Result<Url, AppError> {
    ensure_network_scheme(base)?;
    base.join(path)
        .map_err(|e| AppError::config_error(format!("Invalid source path '{}': {}", path, e)))
}

fn ensure_network_scheme(base: &Url) -> Result<(), AppError> {
    match base.scheme() {
        "http" | "https" => Ok(()),
        other => Err(AppError::Protocol { scheme: other.to_string() }),
    }
}
