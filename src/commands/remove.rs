/// Command for deleting a habit and its history

use serde::{Deserialize, Serialize};

use crate::commands::{resolve_habit, CommandError};
use crate::storage::HabitStore;

/// Parameters for removing a habit
#[derive(Debug, Deserialize)]
pub struct RemoveHabitParams {
    /// Habit ID or exact habit name
    pub habit: String,
}

/// Response from removing a habit
#[derive(Debug, Serialize)]
pub struct RemoveHabitResponse {
    pub habit_id: String,
    pub message: String,
}

/// Delete a habit; its entire history goes with it
pub fn remove_habit<S: HabitStore>(
    store: &S,
    params: RemoveHabitParams,
) -> Result<RemoveHabitResponse, CommandError> {
    let habit = resolve_habit(store, &params.habit)?;
    store.delete_habit(&habit.id)?;

    Ok(RemoveHabitResponse {
        habit_id: habit.id.to_string(),
        message: format!(
            "🗑️ Removed '{}' and {} recorded day{}",
            habit.name,
            habit.history.len(),
            if habit.history.len() == 1 { "" } else { "s" }
        ),
    })
}
