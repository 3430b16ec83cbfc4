use std::path::Path;

use crate::app::api;
use crate::app::config::ConfigOverrides;
use crate::domain::AppError;

pub fn run_search(
    config: Option<&Path>,
    overrides: &ConfigOverrides,
    name: &str,
    html: bool,
) -> Result<(), AppError> {
    let session = api::open_session(config, overrides)?;

    if html {
        println!("{}", api::search_html(&session, name)?);
        return Ok(());
    }

    let items = session.find_assignments(name)?;
    for line in api::numbered_lines(&items) {
        println!("{}", line);
    }
    Ok(())
}
