/// Command for recording a habit's value for a day

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::commands::{resolve_habit, CommandError};
use crate::domain::{DayRecord, HabitKind, HabitValue, TimeRangeOption};
use crate::stats::HabitStatistics;
use crate::storage::HabitStore;

/// Parameters for logging a habit
#[derive(Debug, Deserialize)]
pub struct LogHabitParams {
    /// Habit ID or exact habit name
    pub habit: String,
    /// Day to record, YYYY-MM-DD; defaults to today
    pub date: Option<String>,
    /// Binary habits: whether the day was completed (defaults to true)
    pub completed: Option<bool>,
    /// Numeric and graph habits: the recorded count or rating
    pub value: Option<u32>,
}

/// Response from logging a habit
#[derive(Debug, Serialize)]
pub struct LogHabitResponse {
    pub message: String,
    pub current_streak: u32,
}

/// Record a day's value, replacing any existing record for that day
///
/// The value shape is derived from the habit's kind, so a mismatched
/// variant can never reach the store.
pub fn log_habit<S: HabitStore>(
    store: &S,
    params: LogHabitParams,
) -> Result<LogHabitResponse, CommandError> {
    let mut habit = resolve_habit(store, &params.habit)?;

    let date = match params.date {
        Some(date_str) => NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
            CommandError::InvalidArgument(format!(
                "Invalid date '{}'. Expected YYYY-MM-DD",
                date_str
            ))
        })?,
        None => Utc::now().naive_utc().date(),
    };

    let value = match habit.kind {
        HabitKind::Binary => HabitValue::Binary {
            completed: params.completed.unwrap_or(true),
        },
        HabitKind::Numeric { .. } => {
            let value = params.value.ok_or_else(|| {
                CommandError::InvalidArgument(
                    "Numeric habits need a recorded count (--value)".to_string(),
                )
            })?;
            HabitValue::Numeric { value }
        }
        HabitKind::Graph { scale } => {
            let value = params.value.ok_or_else(|| {
                CommandError::InvalidArgument(
                    "Graph habits need a rating (--value)".to_string(),
                )
            })?;
            if value > scale {
                return Err(CommandError::InvalidArgument(format!(
                    "Rating {} is above this habit's scale of {}",
                    value, scale
                )));
            }
            HabitValue::Graph { value }
        }
    };

    let record = DayRecord::new(date, value)?;
    store.upsert_record(&habit.id, &record)?;

    // Report the streak as it stands after this write
    habit.upsert_record(record);
    let current_streak =
        HabitStatistics::new(&habit, TimeRangeOption::AllTime).current_streak();

    Ok(LogHabitResponse {
        message: format!(
            "🔥 Logged '{}' for {}. Current streak: {} day{}",
            habit.name,
            date,
            current_streak,
            if current_streak == 1 { "" } else { "s" }
        ),
        current_streak,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add_habit, AddHabitParams};
    use crate::storage::SqliteStore;
    use chrono::Duration;

    fn add(store: &SqliteStore, kind: &str, target: Option<u32>) -> String {
        add_habit(
            store,
            AddHabitParams {
                name: "Test".to_string(),
                kind: kind.to_string(),
                target,
                scale: None,
                icon: None,
                goal_value: None,
                goal_period: None,
            },
        )
        .unwrap()
        .habit_id
    }

    fn log_params(habit: &str) -> LogHabitParams {
        LogHabitParams {
            habit: habit.to_string(),
            date: None,
            completed: None,
            value: None,
        }
    }

    #[test]
    fn test_log_binary_defaults_to_completed() {
        let store = SqliteStore::open_in_memory().unwrap();
        let habit_id = add(&store, "binary", None);

        let response = log_habit(&store, log_params(&habit_id)).unwrap();
        assert_eq!(response.current_streak, 1);
    }

    #[test]
    fn test_log_by_name() {
        let store = SqliteStore::open_in_memory().unwrap();
        add(&store, "binary", None);

        assert!(log_habit(&store, log_params("Test")).is_ok());
        assert!(log_habit(&store, log_params("Unknown")).is_err());
    }

    #[test]
    fn test_numeric_log_requires_value() {
        let store = SqliteStore::open_in_memory().unwrap();
        let habit_id = add(&store, "numeric", Some(8));

        assert!(log_habit(&store, log_params(&habit_id)).is_err());

        let mut params = log_params(&habit_id);
        params.value = Some(8);
        assert!(log_habit(&store, params).is_ok());
    }

    #[test]
    fn test_graph_rating_capped_at_scale() {
        let store = SqliteStore::open_in_memory().unwrap();
        let habit_id = add(&store, "graph", None);

        let mut params = log_params(&habit_id);
        params.value = Some(11);
        assert!(log_habit(&store, params).is_err());
    }

    #[test]
    fn test_streak_reflects_consecutive_logs() {
        let store = SqliteStore::open_in_memory().unwrap();
        let habit_id = add(&store, "binary", None);
        let today = Utc::now().naive_utc().date();

        for offset in (0..3).rev() {
            let mut params = log_params(&habit_id);
            params.date = Some((today - Duration::days(offset)).to_string());
            let response = log_habit(&store, params).unwrap();
            if offset == 0 {
                assert_eq!(response.current_streak, 3);
            }
        }
    }

    #[test]
    fn test_relog_replaces_same_day() {
        let store = SqliteStore::open_in_memory().unwrap();
        let habit_id = add(&store, "binary", None);

        let mut missed = log_params(&habit_id);
        missed.completed = Some(false);
        log_habit(&store, missed).unwrap();
        let response = log_habit(&store, log_params(&habit_id)).unwrap();

        assert_eq!(response.current_streak, 1);
        let habit = resolve_habit(&store, &habit_id).unwrap();
        assert_eq!(habit.history.len(), 1);
    }
}
