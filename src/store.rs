//! In-memory roster of student records.

use thiserror::Error;

use crate::record::StudentRecord;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    /// `add` rejects an already-present number instead of overwriting.
    #[error("student number '{0}' already exists")]
    DuplicateNumber(u32),
}

/// Ordered collection of student records, unique by student number.
///
/// Insertion order is preserved and is the order `iter` and the persisted
/// snapshot report. The store is single-threaded process state: constructed
/// empty, optionally seeded from a roster file, mutated through the session.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<StudentRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        RecordStore {
            records: Vec::new(),
        }
    }

    /// Appends a record to the roster.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::DuplicateNumber`] if the number is already
    /// present. Callers wanting a friendlier path should check [`exists`]
    /// first; the store rejects regardless.
    ///
    /// [`exists`]: RecordStore::exists
    pub fn add(&mut self, record: StudentRecord) -> Result<(), RosterError> {
        if self.exists(record.number) {
            return Err(RosterError::DuplicateNumber(record.number));
        }
        self.records.push(record);
        Ok(())
    }

    /// Whether a record with the given number is present.
    pub fn exists(&self, number: u32) -> bool {
        self.records.iter().any(|r| r.number == number)
    }

    /// Removes every record with the given number and reports whether the
    /// roster shrank. Uniqueness means at most one record is ever removed.
    pub fn delete(&mut self, number: u32) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.number != number);
        self.records.len() < before
    }

    /// Read-only view of the records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &StudentRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
