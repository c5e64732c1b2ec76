pub mod check;
pub mod config;
pub mod conflict;
pub mod convert;
pub mod holiday;
pub mod month;

use std::path::Path;

use taqwim_core::{Config, ScheduleBook, ScheduleConflictPresenter};

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Presenter built from the user's configuration. An unreadable or invalid
/// config file is an error, never a silent fallback to the defaults.
pub fn load_presenter() -> Result<ScheduleConflictPresenter, Box<dyn std::error::Error>> {
    let config = Config::load()?;
    Ok(ScheduleConflictPresenter::from_config(&config)?)
}

/// Read an events JSON file, or an empty book when no file is given.
pub fn load_book(path: Option<&Path>) -> Result<ScheduleBook, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading events file");
            let json = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            Ok(ScheduleBook::from_json(&json)?)
        }
        None => Ok(ScheduleBook::new()),
    }
}

pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
