/// Public library interface for Habitual
///
/// This module wires the domain, statistics, storage, backup, and command
/// layers together and exports the public types used by the binary and by
/// tests.

use std::path::PathBuf;

use thiserror::Error;

// Internal modules
mod backup;
mod commands;
mod domain;
mod stats;
mod storage;

// Re-export public modules and types
pub use backup::{export_backup, import_backup, BackupData, BackupError, BACKUP_VERSION};
pub use commands::*;
pub use domain::*;
pub use stats::{HabitStatistics, StatisticsResult};
pub use storage::{HabitStore, SqliteStore, StorageError};

/// Errors that can occur at the application level
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("Domain validation error: {0}")]
    Domain(#[from] domain::DomainError),

    #[error("Backup error: {0}")]
    Backup(#[from] backup::BackupError),

    #[error("{0}")]
    Command(#[from] commands::CommandError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The habit tracker application root
///
/// Owns the SQLite store and hands it to command handlers. Construct one
/// per process; all state lives in the database file.
pub struct Habitual {
    store: SqliteStore,
}

impl Habitual {
    /// Open (or create) the habit database at the given path
    pub fn open(db_path: PathBuf) -> Result<Self, AppError> {
        tracing::info!("Opening habit database: {:?}", db_path);

        let store = SqliteStore::new(db_path)?;

        Ok(Self { store })
    }

    /// Get a reference to the store (command handlers, tests)
    pub fn store(&self) -> &SqliteStore {
        &self.store
    }
}
