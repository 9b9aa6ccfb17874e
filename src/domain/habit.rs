/// Habit entity and related functionality
///
/// This module defines the core Habit struct: a habit's identity, its
/// tracking-kind configuration, display metadata, and its owned history of
/// day records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Color, DayRecord, DomainError, Goal, HabitId, HabitKind};

/// A habit represents something the user wants to do every day
///
/// This is the core aggregate in the system. The habit exclusively owns its
/// history; the statistics engine borrows it read-only, and all mutation
/// goes through the replace-on-conflict helpers below (one record per
/// calendar day).
///
/// Equality is identity: two habits are equal when their IDs match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier for this habit
    pub id: HabitId,
    /// Display name (e.g. "Morning Run", "Drink Water")
    pub name: String,
    /// Symbol name shown on the habit card
    pub icon: String,
    /// Accent color for the habit card and charts
    pub color: Color,
    /// The tracking discipline: binary, numeric-with-target, or graph rating
    pub kind: HabitKind,
    /// Optional goal shown alongside the habit (display only)
    pub goal: Option<Goal>,
    /// All recorded days, exclusively owned by this habit
    pub history: Vec<DayRecord>,
    /// When this habit was created
    pub created_at: DateTime<Utc>,
}

impl PartialEq for Habit {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Habit {}

impl Habit {
    /// Create a new habit with validation and an empty history
    pub fn new(
        name: String,
        icon: String,
        color: Color,
        kind: HabitKind,
        goal: Option<Goal>,
    ) -> Result<Self, DomainError> {
        Self::validate_name(&name)?;
        kind.validate()?;
        if let Some(ref goal) = goal {
            goal.validate()?;
        }

        Ok(Self {
            id: HabitId::new(),
            name,
            icon,
            color,
            kind,
            goal,
            history: Vec::new(),
            created_at: Utc::now(),
        })
    }

    /// Create a habit from existing data (used when loading from the store)
    #[allow(clippy::too_many_arguments)]
    pub fn from_existing(
        id: HabitId,
        name: String,
        icon: String,
        color: Color,
        kind: HabitKind,
        goal: Option<Goal>,
        history: Vec<DayRecord>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            icon,
            color,
            kind,
            goal,
            history,
            created_at,
        }
    }

    /// Update the habit's display properties with validation
    ///
    /// The kind is fixed at creation: changing it under an existing history
    /// would strand every recorded value on a mismatched variant.
    pub fn update(
        &mut self,
        name: Option<String>,
        icon: Option<String>,
        color: Option<Color>,
        goal: Option<Option<Goal>>,
    ) -> Result<(), DomainError> {
        if let Some(ref new_name) = name {
            Self::validate_name(new_name)?;
        }
        if let Some(Some(ref new_goal)) = goal {
            new_goal.validate()?;
        }

        if let Some(new_name) = name {
            self.name = new_name;
        }
        if let Some(new_icon) = icon {
            self.icon = new_icon;
        }
        if let Some(new_color) = color {
            self.color = new_color;
        }
        if let Some(new_goal) = goal {
            self.goal = new_goal;
        }

        Ok(())
    }

    /// First record for the given calendar day, if any
    pub fn record_for_day(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.history.iter().find(|r| r.date == date)
    }

    /// Insert a record, replacing any existing record for the same day
    ///
    /// This is the one-record-per-day invariant enforced at the aggregate
    /// boundary; the store mirrors it with delete-then-insert.
    pub fn upsert_record(&mut self, record: DayRecord) {
        self.history.retain(|r| r.date != record.date);
        self.history.push(record);
    }

    /// Remove the record for a calendar day; returns whether one existed
    pub fn remove_day(&mut self, date: NaiveDate) -> bool {
        let before = self.history.len();
        self.history.retain(|r| r.date != date);
        self.history.len() != before
    }

    /// Validate habit name according to business rules
    fn validate_name(name: &str) -> Result<(), DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string(),
            ));
        }

        if trimmed.len() > 100 {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be longer than 100 characters".to_string(),
            ));
        }

        Ok(())
    }
}
