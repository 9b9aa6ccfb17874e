/// JSON backup and restore
///
/// Exports every habit, with its full history, into a versioned JSON
/// envelope, and restores by replacing the store's contents. The same
/// serde-tagged encoding used at the storage boundary keeps the kind/value
/// discriminators intact across the round trip.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Habit;
use crate::storage::{HabitStore, StorageError};

/// Backup format version this build writes and accepts
pub const BACKUP_VERSION: u32 = 1;

/// Errors that can occur during backup operations
#[derive(Error, Debug)]
pub enum BackupError {
    #[error("Unsupported backup version: {0}")]
    UnsupportedVersion(u32),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The on-disk backup envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct BackupData {
    pub version: u32,
    pub created_at: DateTime<Utc>,
    pub habits: Vec<Habit>,
}

impl BackupData {
    /// Wrap habits in a current-version envelope stamped now
    pub fn new(habits: Vec<Habit>) -> Self {
        Self {
            version: BACKUP_VERSION,
            created_at: Utc::now(),
            habits,
        }
    }
}

/// Write all habits to a pretty-printed JSON backup file
///
/// Returns the number of habits exported.
pub fn export_backup<S: HabitStore>(store: &S, path: &Path) -> Result<usize, BackupError> {
    let habits = store.list_habits()?;
    let backup = BackupData::new(habits);

    let json = serde_json::to_string_pretty(&backup)?;
    fs::write(path, json)?;

    tracing::info!("Exported {} habits to {:?}", backup.habits.len(), path);
    Ok(backup.habits.len())
}

/// Restore habits from a JSON backup file, replacing current data
///
/// The restore is destructive: every existing habit is deleted before the
/// backup's habits are inserted. A version newer than this build knows is
/// rejected before anything is touched.
///
/// Returns the number of habits imported.
pub fn import_backup<S: HabitStore>(store: &S, path: &Path) -> Result<usize, BackupError> {
    let json = fs::read_to_string(path)?;
    let backup: BackupData = serde_json::from_str(&json)?;

    if backup.version != BACKUP_VERSION {
        return Err(BackupError::UnsupportedVersion(backup.version));
    }

    for habit in store.list_habits()? {
        store.delete_habit(&habit.id)?;
    }

    for habit in &backup.habits {
        store.create_habit(habit)?;
    }

    tracing::info!("Imported {} habits from {:?}", backup.habits.len(), path);
    Ok(backup.habits.len())
}
