pub mod api;
pub mod cli;
pub mod config;
pub mod loader;
pub mod logging;
pub mod session;

pub use session::Session;
