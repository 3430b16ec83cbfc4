//! Session-scoped caches and the lookup operations built on them.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{error, info, warn};

use crate::app::loader;
use crate::domain::format::{InstructionFormatter, MarkupRenderer};
use crate::domain::{
    AppError, Assignment, Dataset, LookupConfig, Status, TextBank, TextResult, find_assignments,
    resolve_text,
};
use crate::ports::{ResourceFetcher, StatusSink, WorkbookReader};

/// Lazily populated, at-most-once value.
///
/// The slot stays locked while a loader runs, so concurrent first callers see
/// one load and share its result.
#[derive(Debug)]
pub(crate) struct SessionStore<T> {
    slot: Mutex<Option<Arc<T>>>,
}

impl<T> Default for SessionStore<T> {
    fn default() -> Self {
        Self { slot: Mutex::new(None) }
    }
}

impl<T> SessionStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<Arc<T>> {
        self.lock().clone()
    }

    /// Cached value, or the result of `load` stored on success.
    pub fn get_or_try_init<F>(&self, load: F) -> Result<Arc<T>, AppError>
    where
        F: FnOnce() -> Result<T, AppError>,
    {
        let mut slot = self.lock();
        if let Some(value) = slot.as_ref() {
            return Ok(Arc::clone(value));
        }
        let value = Arc::new(load()?);
        *slot = Some(Arc::clone(&value));
        Ok(value)
    }

    /// Store `value` unless another one got there first; returns the stored value.
    pub fn set_if_empty(&self, value: T) -> Arc<T> {
        let mut slot = self.lock();
        Arc::clone(slot.get_or_insert_with(|| Arc::new(value)))
    }

    pub fn replace(&self, value: T) -> Arc<T> {
        let value = Arc::new(value);
        *self.lock() = Some(Arc::clone(&value));
        value
    }

    fn lock(&self) -> MutexGuard<'_, Option<Arc<T>>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Lookup session: configuration, collaborators, and the two caches.
pub struct Session<F, W, S> {
    config: LookupConfig,
    fetcher: F,
    reader: W,
    status: S,
    dataset: SessionStore<Dataset>,
    text_bank: SessionStore<TextBank>,
}

impl<F, W, S> Session<F, W, S>
where
    F: ResourceFetcher,
    W: WorkbookReader,
    S: StatusSink,
{
    pub fn new(config: LookupConfig, fetcher: F, reader: W, status: S) -> Self {
        Self {
            config,
            fetcher,
            reader,
            status,
            dataset: SessionStore::new(),
            text_bank: SessionStore::new(),
        }
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Loaded dataset, fetching it on first use.
    pub fn dataset(&self) -> Result<Arc<Dataset>, AppError> {
        self.dataset.get_or_try_init(|| self.load())
    }

    /// Fetch the dataset again, replacing the cached one on success.
    pub fn reload_dataset(&self) -> Result<Arc<Dataset>, AppError> {
        let dataset = self.load()?;
        Ok(self.dataset.replace(dataset))
    }

    /// Cached text bank, retrying the fetch when an earlier one failed.
    pub fn text_bank(&self) -> Option<Arc<TextBank>> {
        if let Some(bank) = self.text_bank.get() {
            return Some(bank);
        }
        let result = loader::fetch_text_bank(&self.config, &self.fetcher);
        self.accept_text_bank(result)
    }

    /// Wave-filtered assignments whose tester contains `name`.
    pub fn find_assignments(&self, name: &str) -> Result<Vec<Assignment>, AppError> {
        let name = name.trim();
        if name.is_empty() {
            self.status.show(Status::error("Enter a full name"));
            return Err(AppError::EmptyQuery);
        }

        let dataset = self.dataset()?;
        Ok(find_assignments(name, &dataset.rows, &self.config.wave))
    }

    /// Instruction text for `item`: text bank first, texts sheet second.
    pub fn resolve(&self, item: &Assignment) -> Result<TextResult, AppError> {
        let bank = self.text_bank();
        let dataset = self.dataset()?;
        Ok(resolve_text(&item.partner, &item.method, bank.as_deref(), Some(&dataset.legacy_texts)))
    }

    /// Formatted instruction markup for `item` as seen by `tester`.
    pub fn instruction_html<R: MarkupRenderer>(
        &self,
        item: &Assignment,
        tester: &str,
        renderer: &R,
    ) -> Result<String, AppError> {
        let result = self.resolve(item)?;
        let bank = self.text_bank.get();
        let general = bank.as_deref().and_then(TextBank::general_template);

        InstructionFormatter::new(&self.config.placeholders, general, renderer).format(
            &result,
            item,
            tester.trim(),
        )
    }

    fn load(&self) -> Result<Dataset, AppError> {
        let with_text_bank = self.text_bank.get().is_none();

        let load = loader::load_sources(&self.config, &self.fetcher, &self.reader, with_text_bank)
            .map_err(|err| self.report_load_failure(err))?;

        if let Some(result) = load.text_bank {
            self.accept_text_bank(result);
        }

        let dataset = load.dataset.map_err(|err| self.report_load_failure(err))?;
        info!(rows = dataset.rows.len(), "workbook loaded");
        self.status.show(Status::success(format!("Workbook loaded ({})", dataset.rows.len())));
        Ok(dataset)
    }

    fn accept_text_bank(&self, result: Result<TextBank, AppError>) -> Option<Arc<TextBank>> {
        match result {
            Ok(bank) => {
                info!(entries = bank.specific_texts.len(), "text bank loaded");
                Some(self.text_bank.set_if_empty(bank))
            }
            Err(err) => {
                warn!(error = %err, "text bank unavailable, falling back to workbook texts");
                self.status.show(Status::error("Failed to load instruction texts"));
                None
            }
        }
    }

    fn report_load_failure(&self, err: AppError) -> AppError {
        error!(error = %err, "dataset load failed");
        let message = match &err {
            AppError::Protocol { .. } => "Open through http://localhost/ (not file://)".to_string(),
            AppError::MissingSheet(name) => format!("No \"{}\" sheet in the workbook", name),
            _ => "Failed to load the workbook".to_string(),
        };
        self.status.show(Status::error(message));
        err
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use url::Url;

    use super::*;
    use crate::adapters::MinijinjaMarkupRenderer;
    use crate::domain::StatusLevel;
    use crate::testing::{
        FakeFetcher, FakeWorkbookReader, RecordingStatus, TEXT_BANK_JSON, assignment_workbook,
    };

    const WORKBOOK_URL: &str = "http://host/new/data.xlsx";
    const TEXT_BANK_URL: &str = "http://host/new/restaurant-texts.json";

    type TestSession = Session<FakeFetcher, FakeWorkbookReader, RecordingStatus>;

    fn session(fetcher: FakeFetcher) -> TestSession {
        let mut config = LookupConfig::default();
        config.source.base_url = Url::parse("http://host/new/").unwrap();
        config.source.workbook_candidates = vec!["data.xlsx".to_string()];
        let reader = FakeWorkbookReader::new().with_workbook(b"wb", assignment_workbook());
        Session::new(config, fetcher, reader, RecordingStatus::new())
    }

    fn full_fetcher() -> FakeFetcher {
        FakeFetcher::new()
            .with_body(WORKBOOK_URL, b"wb")
            .with_body(TEXT_BANK_URL, TEXT_BANK_JSON.as_bytes())
    }

    #[test]
    fn store_loads_once() {
        let store = SessionStore::new();
        let first = store.get_or_try_init(|| Ok(1)).unwrap();
        let second = store.get_or_try_init(|| Ok(2)).unwrap();

        assert_eq!((*first, *second), (1, 1));
        assert_eq!(*store.replace(3), 3);
        assert_eq!(*store.set_if_empty(4), 3);
        assert_eq!(store.get().as_deref(), Some(&3));
    }

    #[test]
    fn failed_load_leaves_store_empty() {
        let store: SessionStore<u8> = SessionStore::new();
        assert!(store.get_or_try_init(|| Err(AppError::EmptyQuery)).is_err());
        assert!(store.get().is_none());
    }

    #[test]
    fn concurrent_first_use_loads_once() {
        let store: SessionStore<usize> = SessionStore::new();
        let loads = Mutex::new(0);

        thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    store
                        .get_or_try_init(|| {
                            *loads.lock().unwrap() += 1;
                            Ok(42)
                        })
                        .unwrap()
                });
            }
        });

        assert_eq!(*loads.lock().unwrap(), 1);
    }

    #[test]
    fn search_loads_dataset_once_and_filters_wave() {
        let session = session(full_fetcher());

        let first = session.find_assignments("ivanov").unwrap();
        let second = session.find_assignments("Ivanov Petr").unwrap();

        let restaurants: Vec<_> = first.iter().map(|i| i.restaurant.as_str()).collect();
        assert_eq!(restaurants, vec!["Burger Co #1", "Pizza #7"]);
        assert_eq!(second.len(), 2);
        let workbook_fetches =
            session.fetcher.requested().iter().filter(|u| u.as_str() == WORKBOOK_URL).count();
        assert_eq!(workbook_fetches, 1);
        assert_eq!(session.status.shown(), vec![Status::success("Workbook loaded (3)")]);
    }

    #[test]
    fn empty_name_is_rejected_without_loading() {
        let session = session(full_fetcher());

        assert!(matches!(session.find_assignments("   "), Err(AppError::EmptyQuery)));
        assert!(session.fetcher.requested().is_empty());
    }

    #[test]
    fn reload_fetches_again() {
        let session = session(full_fetcher());
        session.dataset().unwrap();
        session.reload_dataset().unwrap();

        let workbook_fetches =
            session.fetcher.requested().iter().filter(|u| u.as_str() == WORKBOOK_URL).count();
        assert_eq!(workbook_fetches, 2);
    }

    #[test]
    fn missing_workbook_is_reported_and_returned() {
        let fetcher = FakeFetcher::new().with_body(TEXT_BANK_URL, TEXT_BANK_JSON.as_bytes());
        let session = session(fetcher);

        let err = session.find_assignments("ivanov").unwrap_err();

        assert!(matches!(err, AppError::DatasetNotFound { .. }));
        let shown = session.status.shown();
        assert_eq!(shown, vec![Status::error("Failed to load the workbook")]);
        // The text bank still arrived alongside the failed workbook fetch.
        assert!(session.text_bank.get().is_some());
    }

    #[test]
    fn structured_text_is_resolved_and_formatted() {
        let session = session(full_fetcher());
        let item = session.find_assignments("ivanov").unwrap().remove(0);

        let html =
            session.instruction_html(&item, " Ivanov Petr ", &MinijinjaMarkupRenderer).unwrap();

        assert!(html.starts_with(
            "Hello, Ivanov Petr!<br>Visit Burger Co #1 at 1 Main St (Delivery).<br>\
             Order from Burger Co #1 via the required delivery service."
        ));
        assert!(html.contains("<div class=\"collapsible\">"));
        assert!(html.contains("<p>Photo<br>Receipt</p>"));
        assert!(html.contains("class=\"report-section\""));
    }

    #[test]
    fn text_bank_failure_degrades_to_legacy_texts() {
        let session = session(
            FakeFetcher::new().with_body(WORKBOOK_URL, b"wb").with_status(TEXT_BANK_URL, 500),
        );
        let items = session.find_assignments("ivanov").unwrap();

        let pizza = session.resolve(&items[1]).unwrap();
        let burger = session.resolve(&items[0]).unwrap();

        assert_eq!(pizza, TextResult::Legacy("Pizza legacy text\nsecond line".to_string()));
        assert_eq!(burger, TextResult::Legacy("Generic legacy text".to_string()));
        let errors = session.status.shown().into_iter().filter(Status::is_error).count();
        assert!(errors >= 1);
        assert!(session.status.shown().iter().any(|s| s.level == StatusLevel::Success));
    }

    fn text_bank_fetches(session: &TestSession) -> usize {
        session.fetcher.requested().iter().filter(|u| u.as_str() == TEXT_BANK_URL).count()
    }

    #[test]
    fn failed_text_bank_is_retried_on_each_resolution() {
        let session = session(
            FakeFetcher::new().with_body(WORKBOOK_URL, b"wb").with_status(TEXT_BANK_URL, 503),
        );
        let items = session.find_assignments("ivanov").unwrap();
        assert_eq!(text_bank_fetches(&session), 1);

        session.resolve(&items[0]).unwrap();
        assert_eq!(text_bank_fetches(&session), 2);
        session.resolve(&items[0]).unwrap();
        assert_eq!(text_bank_fetches(&session), 3);
    }

    #[test]
    fn text_bank_served_after_failure_is_picked_up_and_cached() {
        let session = session(
            FakeFetcher::new().with_body(WORKBOOK_URL, b"wb").with_status(TEXT_BANK_URL, 503),
        );
        let items = session.find_assignments("ivanov").unwrap();
        assert_eq!(
            session.resolve(&items[0]).unwrap(),
            TextResult::Legacy("Generic legacy text".to_string())
        );

        session.fetcher.serve_body(TEXT_BANK_URL, TEXT_BANK_JSON.as_bytes());
        let before = text_bank_fetches(&session);
        let first = session.resolve(&items[0]).unwrap();
        let second = session.resolve(&items[0]).unwrap();

        assert_eq!(first.kind(), "structured");
        assert_eq!(second, first);
        assert_eq!(text_bank_fetches(&session), before + 1);
        assert!(session.text_bank.get().is_some());
    }

    #[test]
    fn file_scheme_reports_protocol_status() {
        let mut session = session(full_fetcher());
        session.config.source.base_url = Url::parse("file:///srv/new/").unwrap();

        let err = session.dataset().unwrap_err();

        assert!(matches!(err, AppError::Protocol { .. }));
        assert_eq!(
            session.status.shown(),
            vec![Status::error("Open through http://localhost/ (not file://)")]
        );
    }
}
