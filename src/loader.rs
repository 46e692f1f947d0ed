//! Roster loading with per-row validation.
//!
//! Bad rows are skipped with a categorized reason rather than failing the
//! whole load; only an unreadable file aborts.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::record::StudentRecord;
use crate::store::RecordStore;

/// A roster row as it appears on disk, before validation.
#[derive(Debug, Deserialize)]
struct RawRow {
    student_number: String,
    student_surname: String,
    student_given_name: String,
    unit_mark: String,
}

/// Why a row was not added during load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Number field was empty.
    MissingNumber,
    /// Number field did not parse as a positive integer.
    InvalidNumber,
    /// A record with this number is already in the roster.
    DuplicateNumber,
    /// Mark field was empty.
    MissingMark,
    /// Mark field did not parse as a non-negative number.
    InvalidMark,
    /// Row shape did not match the header at all.
    Malformed,
}

/// Outcome of a load: how many rows were added and which were skipped.
#[derive(Debug, Default)]
pub struct LoadSummary {
    pub loaded: usize,
    /// 1-based data row numbers paired with the reason each was skipped.
    pub skipped: Vec<(usize, SkipReason)>,
}

impl LoadSummary {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    /// File missing or unopenable. The store keeps its prior state.
    #[error("could not open roster file '{path}'")]
    Unavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Validates one raw row into a record.
///
/// Checks the fields the persisted format is loose about: the number must be
/// a positive integer and the mark a non-negative number. Names pass through
/// as-is.
fn parse_row(raw: &RawRow) -> Result<StudentRecord, SkipReason> {
    if raw.student_number.is_empty() {
        return Err(SkipReason::MissingNumber);
    }
    let number: u32 = raw
        .student_number
        .trim()
        .parse()
        .map_err(|_| SkipReason::InvalidNumber)?;
    if number == 0 {
        return Err(SkipReason::InvalidNumber);
    }

    if raw.unit_mark.is_empty() {
        return Err(SkipReason::MissingMark);
    }
    let mark: f64 = raw
        .unit_mark
        .trim()
        .parse()
        .map_err(|_| SkipReason::InvalidMark)?;
    if mark < 0.0 || mark.is_nan() {
        return Err(SkipReason::InvalidMark);
    }

    Ok(StudentRecord::new(
        number,
        &raw.student_surname,
        &raw.student_given_name,
        mark,
    ))
}

/// Loads roster rows from a CSV file into the store.
///
/// Existing records stay; incoming rows that validate and carry a new number
/// are appended in file order. Each rejected row lands in the summary with
/// its reason.
///
/// # Errors
///
/// [`LoadError::Unavailable`] when the file cannot be opened.
pub fn load_roster(path: &Path, store: &mut RecordStore) -> Result<LoadSummary, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Unavailable {
        path: path.display().to_string(),
        source,
    })?;

    Ok(load_from_reader(file, store))
}

/// Reader-based variant of [`load_roster`], shared with tests.
pub fn load_from_reader<R: Read>(reader: R, store: &mut RecordStore) -> LoadSummary {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut summary = LoadSummary::default();

    for (row_number, result) in rdr.deserialize::<RawRow>().enumerate() {
        let row_number = row_number + 1;

        let raw = match result {
            Ok(raw) => raw,
            Err(e) => {
                debug!(row = row_number, error = %e, "Row did not deserialize");
                summary.skipped.push((row_number, SkipReason::Malformed));
                continue;
            }
        };

        match parse_row(&raw) {
            Ok(record) => match store.add(record) {
                Ok(()) => summary.loaded += 1,
                Err(_) => summary
                    .skipped
                    .push((row_number, SkipReason::DuplicateNumber)),
            },
            Err(reason) => summary.skipped.push((row_number, reason)),
        }
    }

    summary
}
