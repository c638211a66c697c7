use crate::{checker::DatabaseTarget, cli::actions::Action};
use anyhow::{Context, Result};
use clap::ArgMatches;

/// Build one named target from its url/user/password arguments
fn extract_target(matches: &ArgMatches, name: &str) -> Result<DatabaseTarget> {
    let url = matches
        .get_one::<String>(&format!("{name}-url"))
        .with_context(|| format!("connection URL is required for {name}"))?;

    let username = matches
        .get_one::<String>(&format!("{name}-user"))
        .with_context(|| format!("username is required for {name}"))?;

    let password = matches
        .get_one::<String>(&format!("{name}-password"))
        .with_context(|| format!("password is required for {name}"))?;

    DatabaseTarget::new(name, url, username, password)
}

/// Convert `ArgMatches` into typed Action enum with validation
///
/// # Errors
///
/// Returns an error if any target value is missing or empty
pub fn dispatch(matches: &ArgMatches) -> Result<Action> {
    let data_index = extract_target(matches, "data-index")?;
    let jobs_service = extract_target(matches, "jobs-service")?;

    Ok(Action::Check {
        data_index,
        jobs_service,
    })
}
