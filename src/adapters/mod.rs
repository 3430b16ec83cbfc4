mod calamine_workbook;
mod console_status;
mod http_fetcher;
mod minijinja_markup;

pub use calamine_workbook::CalamineWorkbookReader;
pub use console_status::ConsoleStatus;
pub use http_fetcher::HttpFetcher;
pub use minijinja_markup::MinijinjaMarkupRenderer;
