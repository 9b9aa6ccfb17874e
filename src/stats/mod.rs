/// Habit statistics and streak engine
///
/// Pure, read-only computations over a habit's day-record history: current
/// streak, best streak, completion rate, and total completions over a
/// trailing time window. Every query is computed fresh from the borrowed
/// history; nothing here caches, blocks, or performs I/O, so concurrent
/// calls over an immutable snapshot are safe.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DayRecord, Habit, TimeRangeOption};

/// The four statistics computed for a (habit, time range) pair
///
/// A plain value object; callers that only need one number can call the
/// individual methods on [`HabitStatistics`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsResult {
    /// Consecutive completed days ending today
    pub current_streak: u32,
    /// Longest run of consecutive completed days anywhere in history
    pub best_streak: u32,
    /// Completed records in range as an integer percentage of window days
    pub completion_rate: u32,
    /// Completed records within the time range
    pub total_completions: u32,
}

/// Statistics engine for one habit over one time range
///
/// Borrows the habit read-only and never mutates it. Construct with
/// [`HabitStatistics::new`] to evaluate against today's date, or
/// [`HabitStatistics::as_of`] to pin the evaluation date explicitly
/// (deterministic queries, tests).
pub struct HabitStatistics<'a> {
    habit: &'a Habit,
    time_range: TimeRangeOption,
    today: NaiveDate,
}

impl<'a> HabitStatistics<'a> {
    /// Statistics evaluated as of today
    pub fn new(habit: &'a Habit, time_range: TimeRangeOption) -> Self {
        Self::as_of(habit, time_range, Utc::now().naive_utc().date())
    }

    /// Statistics evaluated as of an explicit date instead of the wall clock
    pub fn as_of(habit: &'a Habit, time_range: TimeRangeOption, today: NaiveDate) -> Self {
        Self {
            habit,
            time_range,
            today,
        }
    }

    /// All four statistics at once
    pub fn summary(&self) -> StatisticsResult {
        StatisticsResult {
            current_streak: self.current_streak(),
            best_streak: self.best_streak(),
            completion_rate: self.completion_rate(),
            total_completions: self.total_completions(),
        }
    }

    /// Consecutive completed days ending today
    ///
    /// Walks backward one calendar day at a time. Today without a completed
    /// record is skipped rather than counted as a break: the day is not
    /// decided yet. Any earlier day that is missing or not completed ends
    /// the walk. After the O(n) day index is built, the walk itself is
    /// O(streak length + 1).
    pub fn current_streak(&self) -> u32 {
        let by_day = self.index_by_day();

        let mut streak = 0;
        let mut day = self.today;

        loop {
            let completed = by_day
                .get(&day)
                .map_or(false, |r| self.habit.kind.is_satisfied_by(&r.value));

            if completed {
                streak += 1;
            } else if day != self.today {
                break;
            }

            day = day - Duration::days(1);
        }

        streak
    }

    /// Longest run of consecutive completed days anywhere in history
    ///
    /// Scans the history in ascending date order. A completed record exactly
    /// one calendar day after the previous completion extends the run; any
    /// other day difference starts a new run of 1. A record that is present
    /// but not completed resets the run outright, the same as a gap — unlike
    /// [`Self::current_streak`], where only today gets the benefit of the
    /// doubt. Days with no record at all break implicitly, since the next
    /// completion computes a day difference greater than 1.
    pub fn best_streak(&self) -> u32 {
        let mut records: Vec<&DayRecord> = self.habit.history.iter().collect();
        records.sort_by_key(|r| r.date);

        let mut best: u32 = 0;
        let mut run: u32 = 0;
        let mut last_completed: Option<NaiveDate> = None;

        for record in records {
            if self.habit.kind.is_satisfied_by(&record.value) {
                run = match last_completed {
                    Some(last) if (record.date - last).num_days() == 1 => run + 1,
                    _ => 1,
                };
                best = best.max(run);
                last_completed = Some(record.date);
            } else {
                run = 0;
                last_completed = None;
            }
        }

        best
    }

    /// Completed records in range as a truncated percentage of window days
    ///
    /// The window starts at the earliest recorded date for the all-time
    /// range (today if history is empty), otherwise `today - days`. The day
    /// span is `(today - start)` in whole days, which is 0 when the window
    /// starts today; an empty span yields 0 rather than a division error.
    pub fn completion_rate(&self) -> u32 {
        let start = match self.time_range.window_days() {
            None => self
                .habit
                .history
                .iter()
                .map(|r| r.date)
                .min()
                .unwrap_or(self.today),
            Some(days) => self.today - Duration::days(days),
        };

        let total_days = (self.today - start).num_days();
        if total_days <= 0 {
            return 0;
        }

        let completed = self.total_completions();
        ((f64::from(completed) / total_days as f64) * 100.0) as u32
    }

    /// Completed records within the time range
    ///
    /// The bounded ranges clip to `start <= date <= today`, both ends
    /// inclusive; all-time counts every completed record.
    pub fn total_completions(&self) -> u32 {
        let completed = |r: &DayRecord| self.habit.kind.is_satisfied_by(&r.value);

        let count = match self.time_range.window_days() {
            None => self.habit.history.iter().filter(|r| completed(r)).count(),
            Some(days) => {
                let start = self.today - Duration::days(days);
                self.habit
                    .history
                    .iter()
                    .filter(|r| r.date >= start && r.date <= self.today && completed(r))
                    .count()
            }
        };

        count as u32
    }

    /// Day-indexed view of the history
    ///
    /// When the in-memory history transiently holds duplicates for one day,
    /// the first record wins, matching what the store keeps after its
    /// delete-then-insert write.
    fn index_by_day(&self) -> HashMap<NaiveDate, &'a DayRecord> {
        let mut by_day = HashMap::with_capacity(self.habit.history.len());
        for record in &self.habit.history {
            by_day.entry(record.date).or_insert(record);
        }
        by_day
    }
}
