/// Commands for exporting and importing JSON backups

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::backup;
use crate::commands::CommandError;
use crate::storage::HabitStore;

/// Parameters for the export command
#[derive(Debug, Deserialize)]
pub struct ExportParams {
    pub path: PathBuf,
}

/// Parameters for the import command
#[derive(Debug, Deserialize)]
pub struct ImportParams {
    pub path: PathBuf,
}

/// Response from a backup command
#[derive(Debug, Serialize)]
pub struct BackupResponse {
    pub habit_count: usize,
    pub message: String,
}

/// Export all habits to a JSON backup file
pub fn export_habits<S: HabitStore>(
    store: &S,
    params: ExportParams,
) -> Result<BackupResponse, CommandError> {
    let habit_count = backup::export_backup(store, &params.path)?;

    Ok(BackupResponse {
        habit_count,
        message: format!(
            "💾 Exported {} habit{} to {}",
            habit_count,
            if habit_count == 1 { "" } else { "s" },
            params.path.display()
        ),
    })
}

/// Restore habits from a JSON backup file, replacing current data
pub fn import_habits<S: HabitStore>(
    store: &S,
    params: ImportParams,
) -> Result<BackupResponse, CommandError> {
    let habit_count = backup::import_backup(store, &params.path)?;

    Ok(BackupResponse {
        habit_count,
        message: format!(
            "📥 Restored {} habit{} from {}",
            habit_count,
            if habit_count == 1 { "" } else { "s" },
            params.path.display()
        ),
    })
}
