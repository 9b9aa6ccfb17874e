/// Storage layer for persisting habit data
///
/// This module handles all database operations using SQLite. It provides a
/// clean interface for storing and retrieving habits and their day records.

pub mod migrations;
pub mod sqlite;

// Re-export the main storage types
pub use sqlite::*;

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{DayRecord, Habit, HabitId};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Habit not found: {habit_id}")]
    HabitNotFound { habit_id: String },

    #[error("Migration error: {0}")]
    Migration(String),
}

/// Trait defining the storage interface for habits
///
/// The store is the single writer for habit data; it owns the
/// one-record-per-day invariant at the persistence boundary
/// (delete-then-insert, backed by a unique index). Reads hand out
/// value-semantic snapshots: the returned `Habit` carries its own history
/// and is safe to hand to the statistics engine without coordination.
pub trait HabitStore {
    /// Create a new habit, including any history it already carries
    fn create_habit(&self, habit: &Habit) -> Result<(), StorageError>;

    /// Get a habit by ID with its history loaded in ascending date order
    fn get_habit(&self, habit_id: &HabitId) -> Result<Habit, StorageError>;

    /// Update a habit's display metadata; history is untouched
    fn update_habit(&self, habit: &Habit) -> Result<(), StorageError>;

    /// Delete a habit and its entire history together
    fn delete_habit(&self, habit_id: &HabitId) -> Result<(), StorageError>;

    /// List all habits with their histories, oldest habit first
    fn list_habits(&self) -> Result<Vec<Habit>, StorageError>;

    /// Write a day record, replacing any existing record for that day
    fn upsert_record(&self, habit_id: &HabitId, record: &DayRecord) -> Result<(), StorageError>;

    /// Delete the record for one calendar day, if present
    fn delete_record_for_day(
        &self,
        habit_id: &HabitId,
        date: NaiveDate,
    ) -> Result<(), StorageError>;
}
