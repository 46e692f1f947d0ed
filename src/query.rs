//! Search and grade-filtered retrieval over the roster.

use crate::grade::{GradeBand, classify_grade};
use crate::record::StudentRecord;
use crate::store::RecordStore;

/// Finds records by number or partial name match, case-insensitively.
///
/// A record matches when its number's text form equals `key` exactly, or its
/// surname or given name contains `key` as a substring. Results keep the
/// roster's insertion order; no match is an empty vec, not an error. Empty
/// keys are the caller's problem to reject.
pub fn search<'a>(store: &'a RecordStore, key: &str) -> Vec<&'a StudentRecord> {
    let key = key.to_lowercase();
    store
        .iter()
        .filter(|r| {
            r.number.to_string() == key
                || r.surname.to_lowercase().contains(&key)
                || r.given_name.to_lowercase().contains(&key)
        })
        .collect()
}

/// Keeps the records whose mark classifies to the given grade, in roster order.
pub fn filter_by_grade(store: &RecordStore, grade: GradeBand) -> Vec<&StudentRecord> {
    store
        .iter()
        .filter(|r| classify_grade(r.mark) == grade)
        .collect()
}
