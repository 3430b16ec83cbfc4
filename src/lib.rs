//! wavecheck: look up a tester's restaurant visits and the instructions for each.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    DefaultSession, details_html, instruction_html, numbered_lines, open_session, pick,
    search_html, session_for,
};
pub use app::config::{ConfigOverrides, load_config, parse_config_content};
pub use app::session::Session;
pub use domain::{AppError, Assignment, LookupConfig, TextResult};
