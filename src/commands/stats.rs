/// Command for showing one habit's statistics

use serde::{Deserialize, Serialize};

use crate::commands::{parse_time_range, resolve_habit, CommandError};
use crate::domain::TimeRangeOption;
use crate::stats::{HabitStatistics, StatisticsResult};
use crate::storage::HabitStore;

/// Parameters for the stats command
#[derive(Debug, Deserialize)]
pub struct StatsParams {
    /// Habit ID or exact habit name
    pub habit: String,
    /// Time range to aggregate over; defaults to month
    pub range: Option<String>,
}

/// Response from the stats command
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub habit_id: String,
    pub name: String,
    pub range: String,
    pub stats: StatisticsResult,
    pub message: String,
}

/// Compute the four statistics for one habit over the requested range
pub fn habit_stats<S: HabitStore>(
    store: &S,
    params: StatsParams,
) -> Result<StatsResponse, CommandError> {
    let range = match params.range {
        Some(ref s) => parse_time_range(s)?,
        None => TimeRangeOption::Month,
    };

    let habit = resolve_habit(store, &params.habit)?;
    let stats = HabitStatistics::new(&habit, range).summary();

    let goal_line = match habit.goal {
        Some(goal) => format!("\n   🎯 Goal: {} ({})", goal.value, goal.period.display_name()),
        None => String::new(),
    };
    let message = format!(
        "📊 {} ({})\n   🔥 Current streak: {} days\n   🏆 Best streak: {} days\n   📈 Completion rate: {}%\n   ✅ Total completions: {}{}",
        habit.name,
        range.display_name(),
        stats.current_streak,
        stats.best_streak,
        stats.completion_rate,
        stats.total_completions,
        goal_line
    );

    Ok(StatsResponse {
        habit_id: habit.id.to_string(),
        name: habit.name.clone(),
        range: range.display_name().to_string(),
        stats,
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add_habit, log_habit, AddHabitParams, LogHabitParams};
    use crate::storage::SqliteStore;
    use chrono::{Duration, Utc};

    #[test]
    fn test_stats_for_logged_habit() {
        let store = SqliteStore::open_in_memory().unwrap();
        add_habit(
            &store,
            AddHabitParams {
                name: "Run".to_string(),
                kind: "binary".to_string(),
                target: None,
                scale: None,
                icon: None,
                goal_value: None,
                goal_period: None,
            },
        )
        .unwrap();

        let today = Utc::now().naive_utc().date();
        for offset in 0..3 {
            log_habit(
                &store,
                LogHabitParams {
                    habit: "Run".to_string(),
                    date: Some((today - Duration::days(offset)).to_string()),
                    completed: None,
                    value: None,
                },
            )
            .unwrap();
        }

        let response = habit_stats(
            &store,
            StatsParams {
                habit: "Run".to_string(),
                range: Some("all".to_string()),
            },
        )
        .unwrap();

        assert_eq!(response.stats.current_streak, 3);
        assert_eq!(response.stats.best_streak, 3);
        assert_eq!(response.stats.total_completions, 3);
    }

    #[test]
    fn test_stats_for_unknown_habit() {
        let store = SqliteStore::open_in_memory().unwrap();
        let result = habit_stats(
            &store,
            StatsParams {
                habit: "Nope".to_string(),
                range: None,
            },
        );

        assert!(result.is_err());
    }
}
