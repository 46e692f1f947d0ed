//! Roster persistence and presentation output.
//!
//! Supports CSV snapshot/append, JSON serialization, and table rendering.

use anyhow::Result;
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;
use tabled::{Table, Tabled, settings::Style};
use tracing::debug;

use crate::record::StudentRecord;
use crate::store::RecordStore;

const ROSTER_HEADER: [&str; 4] = [
    "student_number",
    "student_surname",
    "student_given_name",
    "unit_mark",
];

/// Writes the current roster snapshot to `path` under the fixed header,
/// in store order. Overwrites whatever is there.
///
/// The header row is written even for an empty roster.
pub fn save_roster(path: &Path, store: &RecordStore) -> Result<()> {
    debug!(path = %path.display(), records = store.len(), "Writing roster snapshot");

    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(ROSTER_HEADER)?;
    for record in store.iter() {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

/// Appends a single record as a row to the roster CSV.
///
/// Creates the file with the header row if it does not already exist.
pub fn append_record(path: &Path, record: &StudentRecord) -> Result<()> {
    let file_exists = path.exists();
    debug!(path = %path.display(), file_exists, "Appending roster row");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    writer.serialize(record)?;
    writer.flush()?;

    Ok(())
}

/// Serializes records as pretty-printed JSON.
pub fn to_json(records: &[&StudentRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Student Number")]
    number: u32,
    #[tabled(rename = "Student Name")]
    name: String,
    #[tabled(rename = "Unit Mark")]
    mark: f64,
}

impl From<&StudentRecord> for RecordRow {
    fn from(record: &StudentRecord) -> Self {
        RecordRow {
            number: record.number,
            name: record.full_name(),
            mark: record.mark,
        }
    }
}

/// Renders records as a bordered table for terminal display.
pub fn records_table(records: &[&StudentRecord]) -> String {
    let rows: Vec<RecordRow> = records.iter().map(|r| RecordRow::from(*r)).collect();

    Table::new(rows).with(Style::modern()).to_string()
}
