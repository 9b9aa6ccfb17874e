/// Command for listing habits with streak summaries

use serde::{Deserialize, Serialize};

use crate::commands::{parse_time_range, CommandError};
use crate::domain::TimeRangeOption;
use crate::stats::HabitStatistics;
use crate::storage::HabitStore;

/// Parameters for listing habits
#[derive(Debug, Deserialize)]
pub struct ListHabitsParams {
    /// Time range for the completion rate column; defaults to month
    pub range: Option<String>,
}

/// One habit's row in the listing
#[derive(Debug, Serialize)]
pub struct HabitSummary {
    pub habit_id: String,
    pub name: String,
    pub kind: String,
    pub current_streak: u32,
    pub completion_rate: u32,
    pub total_completions: u32,
}

/// Response from listing habits
#[derive(Debug, Serialize)]
pub struct ListHabitsResponse {
    pub habits: Vec<HabitSummary>,
    pub message: String,
}

/// List habits with their statistics over the requested range
pub fn list_habits<S: HabitStore>(
    store: &S,
    params: ListHabitsParams,
) -> Result<ListHabitsResponse, CommandError> {
    let range = match params.range {
        Some(ref s) => parse_time_range(s)?,
        None => TimeRangeOption::Month,
    };

    let habits = store.list_habits()?;

    let summaries: Vec<HabitSummary> = habits
        .iter()
        .map(|habit| {
            let stats = HabitStatistics::new(habit, range);
            HabitSummary {
                habit_id: habit.id.to_string(),
                name: habit.name.clone(),
                kind: habit.kind.display_name().to_string(),
                current_streak: stats.current_streak(),
                completion_rate: stats.completion_rate(),
                total_completions: stats.total_completions(),
            }
        })
        .collect();

    let message = if summaries.is_empty() {
        "No habits yet. Create your first habit with 'habitual add'.".to_string()
    } else {
        let rows = summaries
            .iter()
            .map(|h| {
                format!(
                    "🎯 {} ({})\n   🔥 Streak: {} days | 📊 Rate: {}% | ✅ Total: {}",
                    h.name, h.kind, h.current_streak, h.completion_rate, h.total_completions
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        format!(
            "📋 {} habit{} ({})\n\n{}",
            summaries.len(),
            if summaries.len() == 1 { "" } else { "s" },
            range.display_name(),
            rows
        )
    };

    Ok(ListHabitsResponse {
        habits: summaries,
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add_habit, log_habit, AddHabitParams, LogHabitParams};
    use crate::storage::SqliteStore;

    #[test]
    fn test_empty_list() {
        let store = SqliteStore::open_in_memory().unwrap();
        let response = list_habits(&store, ListHabitsParams { range: None }).unwrap();

        assert!(response.habits.is_empty());
        assert!(response.message.contains("No habits yet"));
    }

    #[test]
    fn test_list_reports_live_statistics() {
        let store = SqliteStore::open_in_memory().unwrap();
        add_habit(
            &store,
            AddHabitParams {
                name: "Walk".to_string(),
                kind: "binary".to_string(),
                target: None,
                scale: None,
                icon: None,
                goal_value: None,
                goal_period: None,
            },
        )
        .unwrap();
        log_habit(
            &store,
            LogHabitParams {
                habit: "Walk".to_string(),
                date: None,
                completed: None,
                value: None,
            },
        )
        .unwrap();

        let response = list_habits(&store, ListHabitsParams { range: None }).unwrap();
        assert_eq!(response.habits.len(), 1);
        assert_eq!(response.habits[0].current_streak, 1);
        assert_eq!(response.habits[0].total_completions, 1);
    }

    #[test]
    fn test_invalid_range_rejected() {
        let store = SqliteStore::open_in_memory().unwrap();
        let result = list_habits(
            &store,
            ListHabitsParams {
                range: Some("fortnight".to_string()),
            },
        );

        assert!(result.is_err());
    }
}
