//! Public API surface for the library.

use std::path::Path;

use crate::adapters::{CalamineWorkbookReader, ConsoleStatus, HttpFetcher, MinijinjaMarkupRenderer};
use crate::app::config::{ConfigOverrides, load_config};
use crate::app::session::Session;
use crate::domain::format::{NO_ADDRESSES_FOUND, render_addresses, render_details};
use crate::domain::{AppError, Assignment, LookupConfig};

/// Session wired to HTTP, calamine, and the console.
pub type DefaultSession = Session<HttpFetcher, CalamineWorkbookReader, ConsoleStatus>;

/// Resolve configuration and open a session over the configured server.
pub fn open_session(
    config_path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<DefaultSession, AppError> {
    let config = load_config(config_path, overrides)?;
    session_for(config)
}

/// Open a session for an already-resolved configuration.
pub fn session_for(config: LookupConfig) -> Result<DefaultSession, AppError> {
    let fetcher = HttpFetcher::new(&config.source)?;
    Ok(Session::new(config, fetcher, CalamineWorkbookReader, ConsoleStatus))
}

/// Numbered terminal lines for a result list.
pub fn numbered_lines(items: &[Assignment]) -> Vec<String> {
    if items.is_empty() {
        return vec![NO_ADDRESSES_FOUND.to_string()];
    }
    items.iter().enumerate().map(|(i, item)| format!("{}. {}", i + 1, item.display())).collect()
}

/// Results-list markup for `name`.
pub fn search_html(session: &DefaultSession, name: &str) -> Result<String, AppError> {
    let items = session.find_assignments(name)?;
    render_addresses(&MinijinjaMarkupRenderer::new(), &items)
}

/// Instruction markup for `item`.
pub fn instruction_html(
    session: &DefaultSession,
    item: &Assignment,
    tester: &str,
) -> Result<String, AppError> {
    session.instruction_html(item, tester, &MinijinjaMarkupRenderer::new())
}

/// Detail panel markup for `item`, instruction included.
pub fn details_html(
    session: &DefaultSession,
    item: &Assignment,
    tester: &str,
) -> Result<String, AppError> {
    let renderer = MinijinjaMarkupRenderer::new();
    let text = session.instruction_html(item, tester, &renderer)?;
    render_details(&renderer, item, tester.trim(), &text)
}

/// 1-based pick into `items`.
pub fn pick(items: Vec<Assignment>, pick: usize) -> Result<Assignment, AppError> {
    let available = items.len();
    pick.checked_sub(1)
        .and_then(|index| items.into_iter().nth(index))
        .ok_or(AppError::PickOutOfRange { pick, available })
}
