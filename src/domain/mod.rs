/// Domain module containing core business logic and data types
///
/// This module defines the core entities (Habit, DayRecord) and the value
/// types they are built from (HabitKind, HabitValue, Goal, TimeRangeOption),
/// along with their validation rules.

pub mod habit;
pub mod record;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use record::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Invalid habit kind: {0}")]
    InvalidKind(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid value: {message}")]
    InvalidValue { message: String },
}
