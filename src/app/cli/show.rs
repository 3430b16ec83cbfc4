use std::io::IsTerminal;
use std::path::Path;

use dialoguer::Select;

use crate::app::api;
use crate::app::config::ConfigOverrides;
use crate::domain::{AppError, Assignment};

pub fn run_show(
    config: Option<&Path>,
    overrides: &ConfigOverrides,
    name: &str,
    pick: Option<usize>,
    html: bool,
) -> Result<(), AppError> {
    let session = api::open_session(config, overrides)?;
    let items = session.find_assignments(name)?;
    if items.is_empty() {
        return Err(AppError::NoAssignments(name.trim().to_string()));
    }

    let item = match pick {
        Some(position) => api::pick(items, position)?,
        None if std::io::stdin().is_terminal() => match prompt_assignment(items)? {
            Some(item) => item,
            None => return Ok(()),
        },
        None => items
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NoAssignments(name.trim().to_string()))?,
    };

    if html {
        println!("{}", api::details_html(&session, &item, name)?);
    } else {
        println!("{}", item.display());
        println!();
        println!("{}", api::instruction_html(&session, &item, name)?);
    }
    Ok(())
}

fn prompt_assignment(items: Vec<Assignment>) -> Result<Option<Assignment>, AppError> {
    let labels: Vec<&str> = items.iter().map(Assignment::display).collect();
    let selection = Select::new()
        .with_prompt("Select visit")
        .items(&labels)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::Io(std::io::Error::other(err.to_string())))?;

    Ok(selection.and_then(|index| items.into_iter().nth(index)))
}
