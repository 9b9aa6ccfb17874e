/// DayRecord entity for tracking one dated observation
///
/// This module defines the DayRecord struct that represents a habit's
/// recorded value for a single calendar day. Time of day is irrelevant
/// everywhere; all comparisons are whole-day.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, HabitValue, RecordId};

/// A habit's recorded value for one calendar day
///
/// At most one record per (habit, day) is semantically valid; the habit
/// aggregate and the store both replace an existing same-day record rather
/// than keeping two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Unique identifier for this record
    pub id: RecordId,
    /// Which calendar day this observation is for
    pub date: NaiveDate,
    /// The recorded value; its variant must match the owning habit's kind
    pub value: HabitValue,
}

impl DayRecord {
    /// Create a new record with validation
    pub fn new(date: NaiveDate, value: HabitValue) -> Result<Self, DomainError> {
        Self::validate_date(&date)?;

        Ok(Self {
            id: RecordId::new(),
            date,
            value,
        })
    }

    /// Create a record from existing data (used when loading from the store)
    ///
    /// Assumes the data was validated when it was first written.
    pub fn from_existing(id: RecordId, date: NaiveDate, value: HabitValue) -> Self {
        Self { id, date, value }
    }

    /// Validate that the date is not in the future
    fn validate_date(date: &NaiveDate) -> Result<(), DomainError> {
        let today = Utc::now().naive_utc().date();

        if *date > today {
            return Err(DomainError::InvalidDate(
                "Cannot record habits for future dates".to_string(),
            ));
        }

        Ok(())
    }
}
