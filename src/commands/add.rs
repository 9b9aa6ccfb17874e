/// Command for creating new habits

use serde::{Deserialize, Serialize};

use crate::commands::CommandError;
use crate::domain::{Color, Goal, GoalPeriod, Habit, HabitKind};
use crate::storage::HabitStore;

/// Default card color for habits created from the CLI
const DEFAULT_COLOR: Color = Color::rgb(0.35, 0.55, 0.95);

/// Graph habits default to a 1..=10 rating when no scale is given
const DEFAULT_GRAPH_SCALE: u32 = 10;

/// Parameters for creating a new habit
#[derive(Debug, Deserialize)]
pub struct AddHabitParams {
    pub name: String,
    pub kind: String, // "binary", "numeric", or "graph"
    pub target: Option<u32>,
    pub scale: Option<u32>,
    pub icon: Option<String>,
    pub goal_value: Option<u32>,
    pub goal_period: Option<String>,
}

/// Response from creating a habit
#[derive(Debug, Serialize)]
pub struct AddHabitResponse {
    pub habit_id: String,
    pub message: String,
}

/// Create a new habit using the provided store
pub fn add_habit<S: HabitStore>(
    store: &S,
    params: AddHabitParams,
) -> Result<AddHabitResponse, CommandError> {
    let kind = match params.kind.trim().to_lowercase().as_str() {
        "binary" => HabitKind::Binary,
        "numeric" => {
            let target = params.target.ok_or_else(|| {
                CommandError::InvalidArgument(
                    "Numeric habits need a daily target (--target)".to_string(),
                )
            })?;
            HabitKind::Numeric { target }
        }
        "graph" => HabitKind::Graph {
            scale: params.scale.unwrap_or(DEFAULT_GRAPH_SCALE),
        },
        other => {
            return Err(CommandError::InvalidArgument(format!(
                "Invalid kind '{}'. Valid options: binary, numeric, graph",
                other
            )));
        }
    };

    let goal = match (params.goal_value, params.goal_period) {
        (None, None) => None,
        (Some(value), period) => {
            let period = match period.as_deref().map(str::to_lowercase).as_deref() {
                None | Some("daily") => GoalPeriod::Daily,
                Some("weekly") => GoalPeriod::Weekly,
                Some("monthly") => GoalPeriod::Monthly,
                Some(other) => {
                    return Err(CommandError::InvalidArgument(format!(
                        "Invalid goal period '{}'. Valid options: daily, weekly, monthly",
                        other
                    )));
                }
            };
            Some(Goal { value, period })
        }
        (None, Some(_)) => {
            return Err(CommandError::InvalidArgument(
                "A goal period needs a goal value (--goal-value)".to_string(),
            ));
        }
    };

    let habit = Habit::new(
        params.name.clone(),
        params.icon.unwrap_or_else(|| "circle".to_string()),
        DEFAULT_COLOR,
        kind,
        goal,
    )?;

    let habit_id = habit.id.to_string();
    store.create_habit(&habit)?;

    Ok(AddHabitResponse {
        habit_id: habit_id.clone(),
        message: format!(
            "✅ Created {} habit '{}'\nHabit ID: {}",
            habit.kind.display_name(),
            params.name,
            habit_id
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SqliteStore;

    fn params(kind: &str) -> AddHabitParams {
        AddHabitParams {
            name: "Test".to_string(),
            kind: kind.to_string(),
            target: None,
            scale: None,
            icon: None,
            goal_value: None,
            goal_period: None,
        }
    }

    #[test]
    fn test_add_binary_habit() {
        let store = SqliteStore::open_in_memory().unwrap();
        let response = add_habit(&store, params("binary")).unwrap();

        let habits = store.list_habits().unwrap();
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].id.to_string(), response.habit_id);
        assert_eq!(habits[0].kind, HabitKind::Binary);
    }

    #[test]
    fn test_numeric_requires_target() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(add_habit(&store, params("numeric")).is_err());

        let mut with_target = params("numeric");
        with_target.target = Some(8);
        let response = add_habit(&store, with_target);
        assert!(response.is_ok());
    }

    #[test]
    fn test_graph_defaults_scale() {
        let store = SqliteStore::open_in_memory().unwrap();
        add_habit(&store, params("graph")).unwrap();

        let habits = store.list_habits().unwrap();
        assert_eq!(habits[0].kind, HabitKind::Graph { scale: 10 });
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(add_habit(&store, params("hourly")).is_err());
    }
}
