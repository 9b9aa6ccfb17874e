/// Basic unit tests to verify core functionality
use habitual::*;
use tempfile::NamedTempFile;

#[test]
fn test_habit_creation() {
    let habit = Habit::new(
        "Test Habit".to_string(),
        "star".to_string(),
        Color::rgb(0.2, 0.5, 0.8),
        HabitKind::Binary,
        None,
    );

    assert!(habit.is_ok());
    let habit = habit.unwrap();
    assert_eq!(habit.name, "Test Habit");
    assert!(habit.history.is_empty());
}

#[test]
fn test_record_creation() {
    let today = chrono::Utc::now().naive_utc().date();
    let record = DayRecord::new(today, HabitValue::Numeric { value: 30 });

    assert!(record.is_ok());
    let record = record.unwrap();
    assert_eq!(record.date, today);
    assert_eq!(record.value, HabitValue::Numeric { value: 30 });
}

#[test]
fn test_basic_enum_creation() {
    let kind = HabitKind::Numeric { target: 8 };
    assert!(kind.is_satisfied_by(&HabitValue::Numeric { value: 8 }));

    let range = TimeRangeOption::Week;
    assert_eq!(range.window_days(), Some(7));
}

#[test]
fn test_app_open() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let app = Habitual::open(temp_file.path().to_path_buf());
    assert!(app.is_ok());
}

#[test]
fn test_store_creation() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let store = SqliteStore::new(temp_file.path().to_path_buf());
    assert!(store.is_ok());
}

#[test]
fn test_statistics_engine_on_fresh_habit() {
    let habit = Habit::new(
        "Fresh".to_string(),
        "leaf".to_string(),
        Color::rgb(0.3, 0.7, 0.3),
        HabitKind::Binary,
        None,
    )
    .unwrap();

    let stats = HabitStatistics::new(&habit, TimeRangeOption::AllTime).summary();
    assert_eq!(stats.current_streak, 0);
    assert_eq!(stats.best_streak, 0);
    assert_eq!(stats.completion_rate, 0);
    assert_eq!(stats.total_completions, 0);
}
