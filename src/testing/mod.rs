//! In-memory fakes shared by unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use url::Url;

use crate::domain::{AppError, Sheet, Status, Workbook};
use crate::ports::{FetchOutcome, ResourceFetcher, StatusSink, WorkbookReader};

#[derive(Debug, Clone)]
enum FakeResponse {
    Body(Vec<u8>),
    Status(u16),
    Error,
}

/// Fetcher answering from a fixed URL table; unknown URLs answer 404.
#[derive(Debug, Default)]
pub struct FakeFetcher {
    responses: Mutex<HashMap<String, FakeResponse>>,
    requested: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(self, url: &str, body: &[u8]) -> Self {
        self.with(url, FakeResponse::Body(body.to_vec()))
    }

    pub fn with_status(self, url: &str, status: u16) -> Self {
        self.with(url, FakeResponse::Status(status))
    }

    pub fn with_error(self, url: &str) -> Self {
        self.with(url, FakeResponse::Error)
    }

    /// URLs fetched so far, in request order.
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }

    /// Start serving `body` at `url` from now on.
    pub fn serve_body(&self, url: &str, body: &[u8]) {
        self.set(url, FakeResponse::Body(body.to_vec()));
    }

    fn with(self, url: &str, response: FakeResponse) -> Self {
        self.set(url, response);
        self
    }

    fn set(&self, url: &str, response: FakeResponse) {
        let key = Url::parse(url).unwrap().to_string();
        self.responses.lock().unwrap().insert(key, response);
    }
}

impl ResourceFetcher for FakeFetcher {
    fn fetch(&self, url: &Url) -> Result<FetchOutcome, AppError> {
        self.requested.lock().unwrap().push(url.to_string());
        let response = self.responses.lock().unwrap().get(url.as_str()).cloned();
        match response {
            Some(FakeResponse::Body(body)) => Ok(FetchOutcome::Found(body)),
            Some(FakeResponse::Status(status)) => Ok(FetchOutcome::Missing { status }),
            Some(FakeResponse::Error) => Err(AppError::Http("connection refused".to_string())),
            None => Ok(FetchOutcome::Missing { status: 404 }),
        }
    }
}

/// Reader mapping exact byte payloads to prepared workbooks.
#[derive(Debug, Default)]
pub struct FakeWorkbookReader {
    workbooks: Vec<(Vec<u8>, Workbook)>,
}

impl FakeWorkbookReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_workbook(mut self, bytes: &[u8], workbook: Workbook) -> Self {
        self.workbooks.push((bytes.to_vec(), workbook));
        self
    }
}

impl WorkbookReader for FakeWorkbookReader {
    fn read(&self, bytes: &[u8]) -> Result<Workbook, AppError> {
        self.workbooks
            .iter()
            .find(|(known, _)| known.as_slice() == bytes)
            .map(|(_, workbook)| workbook.clone())
            .ok_or_else(|| AppError::parse_error("workbook", "unknown fixture"))
    }
}

/// Status sink keeping every message.
#[derive(Debug, Default)]
pub struct RecordingStatus {
    shown: Mutex<Vec<Status>>,
}

impl RecordingStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> Vec<Status> {
        self.shown.lock().unwrap().clone()
    }
}

impl StatusSink for RecordingStatus {
    fn show(&self, status: Status) {
        self.shown.lock().unwrap().push(status);
    }
}

fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter().map(|r| r.iter().map(|c| c.to_string()).collect()).collect()
}

/// Two wave-1 rows for "Ivanov Petr", one wave-2 row, and a legacy texts sheet.
pub fn assignment_workbook() -> Workbook {
    let selection = Sheet::new(
        "selection",
        grid(&[
            &["Tester", "Wave Number", "Partner", "Restaurant", "Address", "City", "Verification Method"],
            &["Ivanov Petr", "wave 1", "Burger Co", "Burger Co #1", "1 Main St", "Springfield", "Delivery"],
            &["Ivanov Petr", "wave 2", "Burger Co", "Burger Co #2", "2 Main St", "Springfield", "Delivery"],
            &["ivanov  petr", "Wave 1", "Pizza Place", "Pizza #7", "7 Oak Ave", "Shelbyville", "Dine-in"],
        ]),
    );
    let texts = Sheet::new(
        "texts",
        grid(&[
            &["partner", "Pizza Place", "Noodle Bar"],
            &["method", "Dine-in", "Takeaway"],
            &["text", "Pizza legacy text\nsecond line", "Generic legacy text"],
        ]),
    );
    Workbook { sheets: vec![selection, texts] }
}

/// Text bank with a Burger Co / Delivery entry and a general template.
pub const TEXT_BANK_JSON: &str = r#"{
  "specific_texts": {
    "burger_delivery": {
      "partner": "Burger Co",
      "method": "Delivery",
      "content": "Order from &lt;Name&gt; via &lt;DeliveryService&gt;. Report: https://forms.gle/burger1",
      "collapsible_sections": [{"title": "Checklist", "content": "Photo\nReceipt"}]
    }
  },
  "templates": {
    "general": {"content": "Hello, &lt;FullName&gt;!\nVisit &lt;Name&gt; at &lt;Address&gt; (&lt;Method&gt;).\n{SPECIFIC_TEXT}"}
  }
}"#;
