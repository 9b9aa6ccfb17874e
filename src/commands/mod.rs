/// Command handlers for the habitual CLI
///
/// Each command is a function generic over the store, taking a params
/// struct and returning a serializable response with a human-readable
/// message. The binary in main.rs is a thin dispatcher over these.

pub mod add;
pub mod backup;
pub mod list;
pub mod log;
pub mod remove;
pub mod stats;

// Re-export command functions for easy access
pub use add::*;
pub use backup::*;
pub use list::*;
pub use log::*;
pub use remove::*;
pub use stats::*;

use thiserror::Error;

use crate::domain::{DomainError, Habit, HabitId, TimeRangeOption};
use crate::storage::{HabitStore, StorageError};

/// Errors that can occur while handling a command
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Backup(#[from] crate::backup::BackupError),
}

/// Parse a user-supplied time range name
pub(crate) fn parse_time_range(s: &str) -> Result<TimeRangeOption, CommandError> {
    match s.trim().to_lowercase().as_str() {
        "week" => Ok(TimeRangeOption::Week),
        "month" => Ok(TimeRangeOption::Month),
        "3months" | "three-months" | "quarter" => Ok(TimeRangeOption::ThreeMonths),
        "year" => Ok(TimeRangeOption::Year),
        "all" | "all-time" | "alltime" => Ok(TimeRangeOption::AllTime),
        other => Err(CommandError::InvalidArgument(format!(
            "Invalid range '{}'. Valid options: week, month, 3months, year, all",
            other
        ))),
    }
}

/// Find a habit by ID, or fall back to an exact name match
pub(crate) fn resolve_habit<S: HabitStore>(
    store: &S,
    selector: &str,
) -> Result<Habit, CommandError> {
    if let Ok(habit_id) = HabitId::from_string(selector) {
        return Ok(store.get_habit(&habit_id)?);
    }

    store
        .list_habits()?
        .into_iter()
        .find(|h| h.name == selector)
        .ok_or_else(|| {
            CommandError::InvalidArgument(format!("No habit matches '{}'", selector))
        })
}
