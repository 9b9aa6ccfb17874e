/// Basic integration tests covering the add -> log -> stats workflow
use chrono::{Duration, Utc};
use habitual::*;
use tempfile::NamedTempFile;

fn add_params(name: &str, kind: &str, target: Option<u32>) -> AddHabitParams {
    AddHabitParams {
        name: name.to_string(),
        kind: kind.to_string(),
        target,
        scale: None,
        icon: None,
        goal_value: None,
        goal_period: None,
    }
}

#[test]
fn test_full_workflow() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let app = Habitual::open(temp_file.path().to_path_buf()).expect("Failed to open app");
    let store = app.store();

    // Create a numeric habit and log a week of values
    let response = add_habit(store, add_params("Pushups", "numeric", Some(20))).unwrap();
    let today = Utc::now().naive_utc().date();

    for offset in 0..7i64 {
        // Day 3 misses the target; everything else hits it
        let value = if offset == 3 { 10 } else { 25 };
        log_habit(
            store,
            LogHabitParams {
                habit: response.habit_id.clone(),
                date: Some((today - Duration::days(offset)).to_string()),
                completed: None,
                value: Some(value),
            },
        )
        .unwrap();
    }

    let stats = habit_stats(
        store,
        StatsParams {
            habit: "Pushups".to_string(),
            range: Some("week".to_string()),
        },
    )
    .unwrap();

    // Days 0..=2 hit the target, day 3 breaks the walk
    assert_eq!(stats.stats.current_streak, 3);
    assert_eq!(stats.stats.best_streak, 3);
    assert_eq!(stats.stats.total_completions, 6);

    let listing = list_habits(store, ListHabitsParams { range: None }).unwrap();
    assert_eq!(listing.habits.len(), 1);
    assert_eq!(listing.habits[0].current_streak, 3);
}

#[test]
fn test_database_persistence() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = temp_file.path().to_path_buf();

    let habit_id = {
        let app = Habitual::open(db_path.clone()).expect("Failed to open first app");
        let response = add_habit(app.store(), add_params("Read", "binary", None)).unwrap();
        log_habit(
            app.store(),
            LogHabitParams {
                habit: response.habit_id.clone(),
                date: None,
                completed: None,
                value: None,
            },
        )
        .unwrap();
        response.habit_id
    };

    // Reopen the same database and verify the history survived
    let app = Habitual::open(db_path).expect("Failed to open second app");
    let habit = app
        .store()
        .get_habit(&HabitId::from_string(&habit_id).unwrap())
        .unwrap();

    assert_eq!(habit.name, "Read");
    assert_eq!(habit.history.len(), 1);
}

#[test]
fn test_store_trait_object() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let store = SqliteStore::new(temp_file.path().to_path_buf()).expect("Failed to create store");

    // The store is usable behind the trait
    let _: &dyn HabitStore = &store;
}

#[test]
fn test_backup_round_trip_across_stores() {
    let source_db = NamedTempFile::new().unwrap();
    let target_db = NamedTempFile::new().unwrap();
    let backup_file = NamedTempFile::new().unwrap();

    let source = Habitual::open(source_db.path().to_path_buf()).unwrap();
    add_habit(source.store(), add_params("Sleep Early", "graph", None)).unwrap();
    log_habit(
        source.store(),
        LogHabitParams {
            habit: "Sleep Early".to_string(),
            date: None,
            completed: None,
            value: Some(7),
        },
    )
    .unwrap();

    export_habits(
        source.store(),
        ExportParams {
            path: backup_file.path().to_path_buf(),
        },
    )
    .unwrap();

    let target = Habitual::open(target_db.path().to_path_buf()).unwrap();
    import_habits(
        target.store(),
        ImportParams {
            path: backup_file.path().to_path_buf(),
        },
    )
    .unwrap();

    let habits = target.store().list_habits().unwrap();
    assert_eq!(habits.len(), 1);
    assert_eq!(habits[0].name, "Sleep Early");
    assert_eq!(habits[0].history.len(), 1);

    let stats = HabitStatistics::new(&habits[0], TimeRangeOption::AllTime).summary();
    assert_eq!(stats.total_completions, 1);
    assert_eq!(stats.current_streak, 1);
}
