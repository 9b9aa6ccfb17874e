/// SQLite implementation of the habit store interface
///
/// This module provides the concrete SQLite implementation for storing and
/// retrieving habit data. It handles all SQL queries and data conversion.

use std::path::PathBuf;

use chrono::NaiveDate;
use rusqlite::{params, Connection};

use crate::domain::{Color, DayRecord, Goal, Habit, HabitId, HabitKind, HabitValue, RecordId};
use crate::storage::{migrations, HabitStore, StorageError};

/// SQLite-based store implementation
///
/// This struct holds a connection to the SQLite database and implements all
/// the storage operations defined in the HabitStore trait.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SQLite store instance
    ///
    /// This opens the database file and runs any necessary migrations to
    /// ensure the schema is up to date.
    pub fn new(db_path: PathBuf) -> Result<Self, StorageError> {
        let conn = Connection::open(&db_path)
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        // Foreign keys give us the habit -> records delete cascade
        conn.execute("PRAGMA foreign_keys = ON", [])
            .map_err(|e| StorageError::Connection(format!("Failed to enable foreign keys: {}", e)))?;

        migrations::initialize_database(&conn)?;

        tracing::info!("SQLite store initialized at: {:?}", db_path);

        Ok(Self { conn })
    }

    /// In-memory store, used by tests
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        conn.execute("PRAGMA foreign_keys = ON", [])
            .map_err(|e| StorageError::Connection(format!("Failed to enable foreign keys: {}", e)))?;

        migrations::initialize_database(&conn)?;

        Ok(Self { conn })
    }

    /// Load a habit's history in ascending date order
    fn load_records(&self, habit_id: &HabitId) -> Result<Vec<DayRecord>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, value FROM day_records
             WHERE habit_id = ?1 ORDER BY date ASC",
        )?;

        let record_iter = stmt.query_map(params![habit_id.to_string()], |row| {
            let id_str: String = row.get(0)?;
            let id = RecordId::from_string(&id_str).map_err(|_| {
                rusqlite::Error::InvalidColumnType(0, "Invalid UUID".to_string(), rusqlite::types::Type::Text)
            })?;

            let date_str: String = row.get(1)?;
            let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
                rusqlite::Error::InvalidColumnType(1, "Invalid date".to_string(), rusqlite::types::Type::Text)
            })?;

            let value_json: String = row.get(2)?;
            let value: HabitValue = serde_json::from_str(&value_json).map_err(|_| {
                rusqlite::Error::InvalidColumnType(2, "Invalid value".to_string(), rusqlite::types::Type::Text)
            })?;

            Ok(DayRecord::from_existing(id, date, value))
        })?;

        let mut records = Vec::new();
        for record in record_iter {
            records.push(record?);
        }

        Ok(records)
    }

    /// Map a habits-table row (without history) into a Habit
    fn habit_from_row(row: &rusqlite::Row<'_>) -> Result<Habit, rusqlite::Error> {
        let id_str: String = row.get(0)?;
        let id = HabitId::from_string(&id_str).map_err(|_| {
            rusqlite::Error::InvalidColumnType(0, "Invalid UUID".to_string(), rusqlite::types::Type::Text)
        })?;

        let color_json: String = row.get(3)?;
        let color: Color = serde_json::from_str(&color_json).map_err(|_| {
            rusqlite::Error::InvalidColumnType(3, "Invalid color".to_string(), rusqlite::types::Type::Text)
        })?;

        let kind_json: String = row.get(4)?;
        let kind: HabitKind = serde_json::from_str(&kind_json).map_err(|_| {
            rusqlite::Error::InvalidColumnType(4, "Invalid kind".to_string(), rusqlite::types::Type::Text)
        })?;

        let goal_json: Option<String> = row.get(5)?;
        let goal: Option<Goal> = match goal_json {
            Some(json) => Some(serde_json::from_str(&json).map_err(|_| {
                rusqlite::Error::InvalidColumnType(5, "Invalid goal".to_string(), rusqlite::types::Type::Text)
            })?),
            None => None,
        };

        let created_at_str: String = row.get(6)?;
        let created_at = chrono::DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|_| {
                rusqlite::Error::InvalidColumnType(6, "Invalid datetime".to_string(), rusqlite::types::Type::Text)
            })?
            .with_timezone(&chrono::Utc);

        Ok(Habit::from_existing(
            id,
            row.get(1)?, // name
            row.get(2)?, // icon
            color,
            kind,
            goal,
            Vec::new(), // history loaded separately
            created_at,
        ))
    }
}

impl HabitStore for SqliteStore {
    /// Create a new habit in the database
    fn create_habit(&self, habit: &Habit) -> Result<(), StorageError> {
        let color_json = serde_json::to_string(&habit.color)?;
        let kind_json = serde_json::to_string(&habit.kind)?;
        let goal_json = habit.goal.map(|g| serde_json::to_string(&g)).transpose()?;

        self.conn.execute(
            "INSERT INTO habits (id, name, icon, color, kind, goal, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                habit.id.to_string(),
                habit.name,
                habit.icon,
                color_json,
                kind_json,
                goal_json,
                habit.created_at.to_rfc3339(),
            ],
        )?;

        // A freshly created habit has an empty history, but a restored one
        // (backup import) carries records that must land with it.
        for record in &habit.history {
            self.upsert_record(&habit.id, record)?;
        }

        tracing::debug!("Created habit: {} ({})", habit.name, habit.id);
        Ok(())
    }

    /// Get a habit by its ID with history loaded
    fn get_habit(&self, habit_id: &HabitId) -> Result<Habit, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, icon, color, kind, goal, created_at
             FROM habits WHERE id = ?1",
        )?;

        let result = stmt.query_row(params![habit_id.to_string()], Self::habit_from_row);

        match result {
            Ok(mut habit) => {
                habit.history = self.load_records(habit_id)?;
                Ok(habit)
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(StorageError::HabitNotFound {
                habit_id: habit_id.to_string(),
            }),
            Err(e) => Err(StorageError::Query(e)),
        }
    }

    /// Update a habit's display metadata
    fn update_habit(&self, habit: &Habit) -> Result<(), StorageError> {
        let color_json = serde_json::to_string(&habit.color)?;
        let kind_json = serde_json::to_string(&habit.kind)?;
        let goal_json = habit.goal.map(|g| serde_json::to_string(&g)).transpose()?;

        let rows_affected = self.conn.execute(
            "UPDATE habits SET
                name = ?2,
                icon = ?3,
                color = ?4,
                kind = ?5,
                goal = ?6
             WHERE id = ?1",
            params![
                habit.id.to_string(),
                habit.name,
                habit.icon,
                color_json,
                kind_json,
                goal_json,
            ],
        )?;

        if rows_affected == 0 {
            return Err(StorageError::HabitNotFound {
                habit_id: habit.id.to_string(),
            });
        }

        tracing::debug!("Updated habit: {} ({})", habit.name, habit.id);
        Ok(())
    }

    /// Delete a habit; its records go with it via the foreign-key cascade
    fn delete_habit(&self, habit_id: &HabitId) -> Result<(), StorageError> {
        let rows_affected = self.conn.execute(
            "DELETE FROM habits WHERE id = ?1",
            params![habit_id.to_string()],
        )?;

        if rows_affected == 0 {
            return Err(StorageError::HabitNotFound {
                habit_id: habit_id.to_string(),
            });
        }

        tracing::debug!("Deleted habit and history: {}", habit_id);
        Ok(())
    }

    /// List all habits with their histories, oldest habit first
    fn list_habits(&self) -> Result<Vec<Habit>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, icon, color, kind, goal, created_at
             FROM habits ORDER BY created_at ASC",
        )?;

        let habit_iter = stmt.query_map([], Self::habit_from_row)?;

        let mut habits = Vec::new();
        for habit in habit_iter {
            let mut habit = habit?;
            habit.history = self.load_records(&habit.id)?;
            habits.push(habit);
        }

        Ok(habits)
    }

    /// Write a day record, replacing any existing record for that day
    fn upsert_record(&self, habit_id: &HabitId, record: &DayRecord) -> Result<(), StorageError> {
        // Resolve the habit first so a missing ID surfaces as HabitNotFound
        // rather than a raw foreign key failure.
        let exists: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM habits WHERE id = ?1)",
            params![habit_id.to_string()],
            |row| row.get(0),
        )?;
        if !exists {
            return Err(StorageError::HabitNotFound {
                habit_id: habit_id.to_string(),
            });
        }

        let value_json = serde_json::to_string(&record.value)?;

        // Delete-then-insert keeps at most one record per calendar day.
        self.conn.execute(
            "DELETE FROM day_records WHERE habit_id = ?1 AND date = ?2",
            params![habit_id.to_string(), record.date.to_string()],
        )?;
        self.conn.execute(
            "INSERT INTO day_records (id, habit_id, date, value)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                record.id.to_string(),
                habit_id.to_string(),
                record.date.to_string(),
                value_json,
            ],
        )?;

        tracing::debug!("Recorded {} for habit {}", record.date, habit_id);
        Ok(())
    }

    /// Delete the record for one calendar day, if present
    fn delete_record_for_day(
        &self,
        habit_id: &HabitId,
        date: NaiveDate,
    ) -> Result<(), StorageError> {
        self.conn.execute(
            "DELETE FROM day_records WHERE habit_id = ?1 AND date = ?2",
            params![habit_id.to_string(), date.to_string()],
        )?;

        Ok(())
    }
}
