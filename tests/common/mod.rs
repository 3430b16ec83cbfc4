//! Shared fixtures for wavecheck integration tests.

use assert_cmd::Command;
use mockito::{Mock, Server, ServerGuard};
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

pub const TEXT_BANK_JSON: &str = r#"{
  "specific_texts": {
    "burger_delivery": {
      "partner": "Burger Co",
      "method": "Delivery",
      "content": "Order from &lt;Name&gt; via &lt;DeliveryService&gt;.",
      "collapsible_sections": [{"title": "Checklist", "content": "Photo\nReceipt"}],
      "form_link": "https://forms.gle/burger1"
    }
  },
  "templates": {
    "general": {"content": "Hello, &lt;FullName&gt;!\n{SPECIFIC_TEXT}"}
  }
}"#;

const SELECTION: &[&[&str]] = &[
    &["Tester", "Wave Number", "Partner", "Restaurant", "Address", "City", "Verification Method"],
    &["Ivanov Petr", "wave 1", "Burger Co", "Burger Co #1", "1 Main St", "Springfield", "Delivery"],
    &["Ivanov Petr", "wave 2", "Burger Co", "Burger Co #2", "2 Main St", "Springfield", "Delivery"],
    &["Ivanov Petr", "Wave 1", "Pizza Place", "Pizza <7>", "7 Oak Ave", "Shelbyville", "Dine-in"],
    &["Sidorova Anna", "wave 1", "Noodle Bar", "Noodles", "9 Elm St", "Springfield", "Takeaway"],
];

const TEXTS: &[&[&str]] = &[
    &["partner", "Pizza Place"],
    &["method", "Dine-in"],
    &["text", "Pizza legacy text\nsecond line"],
];

/// Assignments workbook as `.xlsx` bytes.
#[allow(dead_code)]
pub fn workbook_bytes() -> Vec<u8> {
    let mut book = Workbook::new();
    for (name, rows) in [("selection", SELECTION), ("texts", TEXTS)] {
        let sheet = book.add_worksheet();
        sheet.set_name(name).unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                sheet.write_string(r as u32, c as u16, *value).unwrap();
            }
        }
    }
    book.save_to_buffer().unwrap()
}

/// Mock server holding the workbook and, optionally, the text bank.
#[allow(dead_code)]
pub struct DataServer {
    pub server: ServerGuard,
    pub workbook: Mock,
    pub text_bank: Mock,
}

#[allow(dead_code)]
impl DataServer {
    pub fn start(with_text_bank: bool) -> Self {
        let mut server = Server::new();
        let workbook = server
            .mock("GET", "/data.xlsx")
            .with_status(200)
            .with_body(workbook_bytes())
            .create();
        let text_bank = if with_text_bank {
            server
                .mock("GET", "/restaurant-texts.json")
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(TEXT_BANK_JSON)
                .create()
        } else {
            server.mock("GET", "/restaurant-texts.json").with_status(404).create()
        };
        Self { server, workbook, text_bank }
    }

    pub fn url(&self) -> String {
        self.server.url()
    }

    /// `wavecheck` pointed at this server from an empty directory.
    pub fn cli(&self, dir: &TempDir) -> Command {
        let mut cmd = Command::cargo_bin("wavecheck").expect("Failed to locate wavecheck binary");
        cmd.current_dir(dir.path())
            .env_remove("WAVECHECK_BASE_URL")
            .env_remove("RUST_LOG")
            .args(["--base-url", &self.url()]);
        cmd
    }
}
