/// Main entry point for the habitual CLI
///
/// This file sets up logging, parses command line arguments, opens the
/// habit database, and dispatches to the command handlers.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use habitual::{
    add_habit, export_habits, habit_stats, import_habits, list_habits, log_habit, remove_habit,
    AddHabitParams, ExportParams, Habitual, ImportParams, ListHabitsParams, LogHabitParams,
    RemoveHabitParams, StatsParams,
};

/// Get the default database path with robust fallback strategy
fn get_default_database_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    // Try various locations in order of preference
    let potential_paths = [
        // 1. User's home directory (preferred)
        dirs::home_dir().map(|mut p| {
            p.push(".habitual");
            p
        }),
        // 2. User's data directory (platform-specific)
        dirs::data_dir().map(|mut p| {
            p.push("habitual");
            p
        }),
        // 3. User's config directory
        dirs::config_dir().map(|mut p| {
            p.push("habitual");
            p
        }),
        // 4. Current working directory (last resort)
        std::env::current_dir().ok().map(|mut p| {
            p.push(".habitual");
            p
        }),
    ];

    for potential_path in potential_paths.iter().flatten() {
        // Try to create the directory
        if let Ok(()) = std::fs::create_dir_all(potential_path) {
            // Test if we can write to this directory
            let test_file = potential_path.join(".test_write");
            if std::fs::write(&test_file, "test").is_ok() {
                let _ = std::fs::remove_file(&test_file); // Clean up test file
                let mut db_path = potential_path.clone();
                db_path.push("habits.db");
                return Ok(db_path);
            }
        }
    }

    // Ultimate fallback: use a temporary directory
    let mut temp_path = std::env::temp_dir();
    temp_path.push("habitual");
    std::fs::create_dir_all(&temp_path)?;
    temp_path.push("habits.db");

    tracing::warn!("Using temporary directory for database: {}", temp_path.display());
    Ok(temp_path)
}

/// Command line arguments for the habitual CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the SQLite database file
    /// If not provided, uses a default location in the user's home directory
    #[arg(long)]
    database: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new habit
    Add {
        /// Display name for the habit
        name: String,
        /// Tracking kind: binary, numeric, or graph
        #[arg(long, default_value = "binary")]
        kind: String,
        /// Daily target for numeric habits
        #[arg(long)]
        target: Option<u32>,
        /// Rating scale for graph habits (default 10)
        #[arg(long)]
        scale: Option<u32>,
        /// Symbol name shown on the habit card
        #[arg(long)]
        icon: Option<String>,
        /// Optional goal value
        #[arg(long)]
        goal_value: Option<u32>,
        /// Goal period: daily, weekly, or monthly
        #[arg(long)]
        goal_period: Option<String>,
    },
    /// Record a habit's value for today or a given day
    Log {
        /// Habit ID or exact habit name
        habit: String,
        /// Day to record (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
        /// Binary habits: completed or not (defaults to true)
        #[arg(long)]
        completed: Option<bool>,
        /// Numeric/graph habits: the count or rating
        #[arg(long)]
        value: Option<u32>,
    },
    /// List habits with streak summaries
    List {
        /// Time range: week, month, 3months, year, all (default month)
        #[arg(long)]
        range: Option<String>,
    },
    /// Show statistics for one habit
    Stats {
        /// Habit ID or exact habit name
        habit: String,
        /// Time range: week, month, 3months, year, all (default month)
        #[arg(long)]
        range: Option<String>,
    },
    /// Delete a habit and its entire history
    Remove {
        /// Habit ID or exact habit name
        habit: String,
    },
    /// Export all habits to a JSON backup file
    Export {
        /// Destination file
        path: PathBuf,
    },
    /// Restore habits from a JSON backup file, replacing current data
    Import {
        /// Backup file to restore
        path: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Set up logging based on command line flags
    let log_level = if cli.verbose {
        "debug"
    } else if cli.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habitual={}", log_level))
        .with_writer(std::io::stderr) // Keep stdout clean for command output
        .init();

    // Determine database path
    let db_path = match cli.database {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            path
        }
        None => get_default_database_path()?,
    };

    info!("Using database at: {}", db_path.display());

    let app = Habitual::open(db_path)?;
    let store = app.store();

    let message = match cli.command {
        Command::Add {
            name,
            kind,
            target,
            scale,
            icon,
            goal_value,
            goal_period,
        } => {
            add_habit(
                store,
                AddHabitParams {
                    name,
                    kind,
                    target,
                    scale,
                    icon,
                    goal_value,
                    goal_period,
                },
            )?
            .message
        }
        Command::Log {
            habit,
            date,
            completed,
            value,
        } => {
            log_habit(
                store,
                LogHabitParams {
                    habit,
                    date,
                    completed,
                    value,
                },
            )?
            .message
        }
        Command::List { range } => list_habits(store, ListHabitsParams { range })?.message,
        Command::Stats { habit, range } => {
            habit_stats(store, StatsParams { habit, range })?.message
        }
        Command::Remove { habit } => remove_habit(store, RemoveHabitParams { habit })?.message,
        Command::Export { path } => export_habits(store, ExportParams { path })?.message,
        Command::Import { path } => import_habits(store, ImportParams { path })?.message,
    };

    println!("{}", message);

    Ok(())
}
