//! CLI entry point for the student roster tool.
//!
//! Provides subcommands for adding, searching, and deleting student records,
//! merging and saving roster files, and displaying grade and mark
//! distributions.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use student_roster::chart::{ChartRow, bar_chart};
use student_roster::distribution::{grade_distribution, mark_distribution, percentages};
use student_roster::grade::GradeBand;
use student_roster::loader::{LoadError, load_roster};
use student_roster::marks::MarkRange;
use student_roster::output::{append_record, records_table, save_roster, to_json};
use student_roster::query::{filter_by_grade, search};
use student_roster::record::StudentRecord;
use student_roster::store::RecordStore;

#[derive(Parser)]
#[command(name = "student_roster")]
#[command(about = "A tool to manage student records for a unit", long_about = None)]
struct Cli {
    /// Roster CSV file (falls back to ROSTER_FILE, then students.csv)
    #[arg(short, long)]
    roster: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a student record to the roster
    Add {
        /// Student number (positive integer)
        number: u32,
        surname: String,
        given_name: String,
        /// Unit mark (non-negative)
        mark: f64,
    },
    /// Search students by number or partial name match
    Search {
        /// Student number or name fragment
        key: String,

        /// Emit matches as JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List the students who achieved the given grade
    ByGrade {
        /// One of HD, D, C, P, N (case-insensitive)
        grade: GradeBand,
    },
    /// Delete a student record by number
    Delete { number: u32 },
    /// Merge student records from another CSV file into the roster
    Load {
        /// File to load records from
        file: PathBuf,
    },
    /// Write the current roster snapshot to a new file
    Save {
        /// Destination file
        output: PathBuf,

        /// Overwrite the destination if it already exists
        #[arg(long, default_value_t = false)]
        force: bool,
    },
    /// Display the grade distribution
    Grades,
    /// Display the marks distribution
    Marks,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/student_roster.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("student_roster.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let roster_path = cli
        .roster
        .or_else(|| std::env::var("ROSTER_FILE").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("students.csv"));

    let mut store = RecordStore::new();
    match load_roster(&roster_path, &mut store) {
        Ok(summary) => {
            info!(
                roster = %roster_path.display(),
                loaded = summary.loaded,
                skipped = summary.skipped_count(),
                "Roster loaded"
            );
        }
        Err(LoadError::Unavailable { ref path, .. }) => {
            warn!(roster = %path, "Roster file not found, starting empty");
        }
    }

    match cli.command {
        Commands::Add {
            number,
            surname,
            given_name,
            mark,
        } => add_student(&roster_path, &store, number, &surname, &given_name, mark)?,
        Commands::Search { key, json } => search_students(&store, &key, json)?,
        Commands::ByGrade { grade } => students_by_grade(&store, grade),
        Commands::Delete { number } => delete_student(&roster_path, &mut store, number)?,
        Commands::Load { file } => load_records(&roster_path, &mut store, &file)?,
        Commands::Save { output, force } => save_records(&store, &output, force)?,
        Commands::Grades => show_grade_distribution(&store),
        Commands::Marks => show_mark_distribution(&store),
    }

    Ok(())
}

/// Validates and appends a new record, persisting it to the roster file.
fn add_student(
    roster_path: &Path,
    store: &RecordStore,
    number: u32,
    surname: &str,
    given_name: &str,
    mark: f64,
) -> Result<()> {
    if number == 0 {
        anyhow::bail!("invalid student number, must be positive");
    }
    if surname.trim().is_empty() {
        anyhow::bail!("surname cannot be empty");
    }
    if given_name.trim().is_empty() {
        anyhow::bail!("given name cannot be empty");
    }
    if mark < 0.0 || mark.is_nan() {
        anyhow::bail!("invalid mark, must be non-negative");
    }
    if store.exists(number) {
        anyhow::bail!("student number '{}' already exists", number);
    }

    let record = StudentRecord::new(number, surname, given_name, mark);
    append_record(roster_path, &record)?;

    println!("Student record added to the system successfully.");
    Ok(())
}

fn search_students(store: &RecordStore, key: &str, json: bool) -> Result<()> {
    if key.trim().is_empty() {
        anyhow::bail!("search keyword cannot be blank");
    }

    let results = search(store, key);
    if json {
        println!("{}", to_json(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No students found with matching keyword.");
        return Ok(());
    }

    println!("{} result(s) found.", results.len());
    println!("{}", records_table(&results));
    Ok(())
}

fn students_by_grade(store: &RecordStore, grade: GradeBand) {
    let results = filter_by_grade(store, grade);
    if results.is_empty() {
        println!("No student record found.");
        return;
    }

    println!("{} student(s) achieved a grade of '{}'.", results.len(), grade);
    for student in results {
        println!("{}", student.full_name());
    }
}

fn delete_student(roster_path: &Path, store: &mut RecordStore, number: u32) -> Result<()> {
    if !store.delete(number) {
        println!("Student record with number '{}' does not exist.", number);
        return Ok(());
    }

    save_roster(roster_path, store)?;
    println!("Student record deleted successfully.");
    Ok(())
}

/// Merges records from `file` into the roster and persists the result.
fn load_records(roster_path: &Path, store: &mut RecordStore, file: &Path) -> Result<()> {
    let summary = load_roster(file, store)?;

    for (row, reason) in &summary.skipped {
        info!(row, ?reason, "Skipped roster row");
    }

    save_roster(roster_path, store)?;
    println!(
        "Loaded {} student(s) from file {} ({} skipped)",
        summary.loaded,
        file.display(),
        summary.skipped_count()
    );
    Ok(())
}

fn save_records(store: &RecordStore, output: &Path, force: bool) -> Result<()> {
    if output.exists() && !force {
        anyhow::bail!(
            "file '{}' already exists, pass --force to overwrite",
            output.display()
        );
    }

    save_roster(output, store)?;
    println!(
        "Student records saved successfully to file '{}'",
        output.display()
    );
    Ok(())
}

fn show_grade_distribution(store: &RecordStore) {
    let counts = grade_distribution(store);
    let Some(shares) = percentages(&counts) else {
        println!("No student records in the system.");
        return;
    };

    let rows: Vec<ChartRow> = GradeBand::ALL
        .iter()
        .map(|band| ChartRow {
            label: band.to_string(),
            count: counts[band],
            percent: shares[band],
        })
        .collect();

    println!("{}", bar_chart("Students Grade Distribution", &rows));
}

fn show_mark_distribution(store: &RecordStore) {
    let counts = mark_distribution(store);
    let Some(shares) = percentages(&counts) else {
        println!("No student records in the system.");
        return;
    };

    let rows: Vec<ChartRow> = MarkRange::ALL
        .iter()
        .map(|range| ChartRow {
            label: range.to_string(),
            count: counts[range],
            percent: shares[range],
        })
        .collect();

    println!("{}", bar_chart("Students Marks Distribution", &rows));
}
