/// Core types and enums used throughout the domain layer
///
/// This module defines the fundamental types like HabitKind, HabitValue and
/// the ID newtypes that are used by Habit, DayRecord, and the statistics
/// engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a habit
///
/// This is a wrapper around UUID to provide type safety - you can't
/// accidentally pass a habit ID where a record ID is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HabitId(pub Uuid);

impl HabitId {
    /// Generate a new random habit ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a habit ID from a string (useful for database loading)
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for HabitId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique identifier for a day record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub Uuid);

impl RecordId {
    /// Generate a new random record ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a record ID from a string
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The tracking discipline for a habit
///
/// The kind decides what a day's record looks like and when that record
/// counts as a completed day. Adding a kind is a compile-time-enforced
/// change: every consumption site matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HabitKind {
    /// Done or not done
    Binary,
    /// A daily count with a target to reach (e.g. 8 glasses of water)
    Numeric { target: u32 },
    /// A 1..=scale rating; any positive rating counts as completed
    Graph { scale: u32 },
}

impl HabitKind {
    /// Get the display name for this kind
    pub fn display_name(&self) -> &str {
        match self {
            HabitKind::Binary => "On/Off",
            HabitKind::Numeric { .. } => "Count",
            HabitKind::Graph { .. } => "Graph",
        }
    }

    /// Validate that the kind's parameters are reasonable
    pub fn validate(&self) -> Result<(), crate::domain::DomainError> {
        match self {
            HabitKind::Binary => {}
            HabitKind::Numeric { target } => {
                if *target == 0 {
                    return Err(crate::domain::DomainError::InvalidKind(
                        "Numeric target must be greater than 0".to_string(),
                    ));
                }
                if *target > 10000 {
                    return Err(crate::domain::DomainError::InvalidKind(
                        "Numeric target cannot exceed 10000".to_string(),
                    ));
                }
            }
            HabitKind::Graph { scale } => {
                if *scale == 0 {
                    return Err(crate::domain::DomainError::InvalidKind(
                        "Graph scale must be greater than 0".to_string(),
                    ));
                }
                if *scale > 100 {
                    return Err(crate::domain::DomainError::InvalidKind(
                        "Graph scale cannot exceed 100".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Decide whether a recorded value counts as a completed day
    ///
    /// Binary habits complete when checked off. Numeric habits complete when
    /// the recorded count reaches or exceeds the daily target. Graph habits
    /// complete on any positive rating; the scale only normalizes display.
    ///
    /// A value whose variant does not match this kind never counts: bad data
    /// degrades to "not completed" instead of an error.
    pub fn is_satisfied_by(&self, value: &HabitValue) -> bool {
        match (self, value) {
            (HabitKind::Binary, HabitValue::Binary { completed }) => *completed,
            (HabitKind::Numeric { target }, HabitValue::Numeric { value }) => value >= target,
            (HabitKind::Graph { .. }, HabitValue::Graph { value }) => *value > 0,
            _ => false,
        }
    }
}

/// A day's recorded value for a habit
///
/// The variant must match the owning habit's kind; the persistence layer
/// round-trips the discriminator exactly so the pairing survives storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HabitValue {
    Binary { completed: bool },
    Numeric { value: u32 },
    Graph { value: u32 },
}

/// An optional target the user sets on top of day-to-day tracking
///
/// Goals are display metadata (e.g. "5 per week" on the habit card); the
/// statistics engine does not consult them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub value: u32,
    pub period: GoalPeriod,
}

impl Goal {
    /// Validate that the goal value is reasonable
    pub fn validate(&self) -> Result<(), crate::domain::DomainError> {
        if self.value == 0 {
            return Err(crate::domain::DomainError::InvalidValue {
                message: "Goal value must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

/// How often a goal's value is meant to be reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalPeriod {
    Daily,
    Weekly,
    Monthly,
}

impl GoalPeriod {
    /// Get the display name for this period
    pub fn display_name(&self) -> &str {
        match self {
            GoalPeriod::Daily => "Daily",
            GoalPeriod::Weekly => "Weekly",
            GoalPeriod::Monthly => "Monthly",
        }
    }
}

/// An RGBA color attached to a habit for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub opacity: f64,
}

impl Color {
    /// Fully opaque color from RGB components in 0.0..=1.0
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red,
            green,
            blue,
            opacity: 1.0,
        }
    }
}

/// A fixed trailing window over which statistics are aggregated
///
/// The bounded options are day counts ending today, not calendar-aligned
/// weeks or months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRangeOption {
    Week,
    Month,
    ThreeMonths,
    Year,
    AllTime,
}

impl TimeRangeOption {
    /// Window length in days, or `None` for the unbounded all-time range
    pub fn window_days(&self) -> Option<i64> {
        match self {
            TimeRangeOption::Week => Some(7),
            TimeRangeOption::Month => Some(30),
            TimeRangeOption::ThreeMonths => Some(90),
            TimeRangeOption::Year => Some(365),
            TimeRangeOption::AllTime => None,
        }
    }

    /// Get the display name for this range
    pub fn display_name(&self) -> &str {
        match self {
            TimeRangeOption::Week => "Week",
            TimeRangeOption::Month => "Month",
            TimeRangeOption::ThreeMonths => "3 Months",
            TimeRangeOption::Year => "Year",
            TimeRangeOption::AllTime => "All Time",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_predicate() {
        let kind = HabitKind::Binary;
        assert!(kind.is_satisfied_by(&HabitValue::Binary { completed: true }));
        assert!(!kind.is_satisfied_by(&HabitValue::Binary { completed: false }));
    }

    #[test]
    fn test_numeric_predicate_requires_target() {
        let kind = HabitKind::Numeric { target: 8 };
        assert!(!kind.is_satisfied_by(&HabitValue::Numeric { value: 7 }));
        assert!(kind.is_satisfied_by(&HabitValue::Numeric { value: 8 }));
        assert!(kind.is_satisfied_by(&HabitValue::Numeric { value: 9 }));
    }

    #[test]
    fn test_graph_predicate_any_positive_rating() {
        let kind = HabitKind::Graph { scale: 10 };
        assert!(kind.is_satisfied_by(&HabitValue::Graph { value: 1 }));
        assert!(!kind.is_satisfied_by(&HabitValue::Graph { value: 0 }));
    }

    #[test]
    fn test_cross_kind_values_never_satisfy() {
        let binary = HabitKind::Binary;
        let numeric = HabitKind::Numeric { target: 1 };
        let graph = HabitKind::Graph { scale: 5 };

        assert!(!binary.is_satisfied_by(&HabitValue::Numeric { value: 10 }));
        assert!(!binary.is_satisfied_by(&HabitValue::Graph { value: 5 }));
        assert!(!numeric.is_satisfied_by(&HabitValue::Binary { completed: true }));
        assert!(!numeric.is_satisfied_by(&HabitValue::Graph { value: 5 }));
        assert!(!graph.is_satisfied_by(&HabitValue::Binary { completed: true }));
        assert!(!graph.is_satisfied_by(&HabitValue::Numeric { value: 5 }));
    }

    #[test]
    fn test_kind_validation() {
        assert!(HabitKind::Binary.validate().is_ok());
        assert!(HabitKind::Numeric { target: 1 }.validate().is_ok());
        assert!(HabitKind::Numeric { target: 0 }.validate().is_err());
        assert!(HabitKind::Graph { scale: 10 }.validate().is_ok());
        assert!(HabitKind::Graph { scale: 0 }.validate().is_err());
        assert!(HabitKind::Graph { scale: 101 }.validate().is_err());
    }

    #[test]
    fn test_value_tag_round_trips() {
        // The storage boundary persists values as tagged JSON; the
        // discriminator must survive exactly so kind/value pairing holds.
        let value = HabitValue::Numeric { value: 42 };
        let json = serde_json::to_string(&value).unwrap();
        let back: HabitValue = serde_json::from_str(&json).unwrap();
        assert_eq!(value, back);

        let kind = HabitKind::Graph { scale: 10 };
        let json = serde_json::to_string(&kind).unwrap();
        let back: HabitKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, back);
    }

    #[test]
    fn test_time_range_windows() {
        assert_eq!(TimeRangeOption::Week.window_days(), Some(7));
        assert_eq!(TimeRangeOption::Month.window_days(), Some(30));
        assert_eq!(TimeRangeOption::ThreeMonths.window_days(), Some(90));
        assert_eq!(TimeRangeOption::Year.window_days(), Some(365));
        assert_eq!(TimeRangeOption::AllTime.window_days(), None);
    }
}
