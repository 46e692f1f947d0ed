//! Grade and mark-range distribution counts over the roster.

use std::collections::BTreeMap;

use crate::grade::{GradeBand, classify_grade};
use crate::marks::{MarkRange, bucket_mark};
use crate::store::RecordStore;

/// Counts records per grade band. Every band is present, zero included,
/// so charts can draw zero-height bars.
pub fn grade_distribution(store: &RecordStore) -> BTreeMap<GradeBand, usize> {
    let mut counts: BTreeMap<GradeBand, usize> =
        GradeBand::ALL.iter().map(|band| (*band, 0)).collect();

    for record in store.iter() {
        *counts.entry(classify_grade(record.mark)).or_insert(0) += 1;
    }

    counts
}

/// Counts records per mark range. Every range is present, zero included.
pub fn mark_distribution(store: &RecordStore) -> BTreeMap<MarkRange, usize> {
    let mut counts: BTreeMap<MarkRange, usize> =
        MarkRange::ALL.iter().map(|range| (*range, 0)).collect();

    for record in store.iter() {
        *counts.entry(bucket_mark(record.mark)).or_insert(0) += 1;
    }

    counts
}

/// Per-category share of the total, as percentages.
///
/// Returns `None` when the counts sum to zero, so callers never divide by
/// an empty roster.
pub fn percentages<K: Ord + Copy>(counts: &BTreeMap<K, usize>) -> Option<BTreeMap<K, f64>> {
    let total: usize = counts.values().sum();
    if total == 0 {
        return None;
    }

    Some(
        counts
            .iter()
            .map(|(key, &count)| (*key, count as f64 / total as f64 * 100.0))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::StudentRecord;

    fn sample_store() -> RecordStore {
        let mut store = RecordStore::new();
        store.add(StudentRecord::new(1, "Lee", "Ann", 82.0)).unwrap();
        store.add(StudentRecord::new(2, "Tan", "Bo", 55.0)).unwrap();
        store.add(StudentRecord::new(3, "Ng", "Cy", 41.0)).unwrap();
        store
    }

    #[test]
    fn test_grade_distribution_counts() {
        let store = sample_store();
        let counts = grade_distribution(&store);

        assert_eq!(counts[&GradeBand::HD], 1);
        assert_eq!(counts[&GradeBand::D], 0);
        assert_eq!(counts[&GradeBand::C], 0);
        assert_eq!(counts[&GradeBand::P], 1);
        assert_eq!(counts[&GradeBand::N], 1);
    }

    #[test]
    fn test_mark_distribution_counts() {
        let store = sample_store();
        let counts = mark_distribution(&store);

        assert_eq!(counts[&MarkRange::Forties], 1);
        assert_eq!(counts[&MarkRange::Fifties], 1);
        assert_eq!(counts[&MarkRange::Eighties], 1);
        assert_eq!(counts[&MarkRange::Below30], 0);
    }

    #[test]
    fn test_distribution_totals_match_store_size() {
        let store = sample_store();
        let grade_total: usize = grade_distribution(&store).values().sum();
        let mark_total: usize = mark_distribution(&store).values().sum();

        assert_eq!(grade_total, store.len());
        assert_eq!(mark_total, store.len());
    }

    #[test]
    fn test_empty_store_yields_all_zero_complete_mappings() {
        let store = RecordStore::new();

        let grades = grade_distribution(&store);
        assert_eq!(grades.len(), GradeBand::ALL.len());
        assert!(grades.values().all(|&c| c == 0));

        let marks = mark_distribution(&store);
        assert_eq!(marks.len(), MarkRange::ALL.len());
        assert!(marks.values().all(|&c| c == 0));
    }

    #[test]
    fn test_percentages() {
        let store = sample_store();
        let counts = grade_distribution(&store);
        let shares = percentages(&counts).unwrap();

        assert!((shares[&GradeBand::HD] - 33.333).abs() < 0.01);
        assert_eq!(shares[&GradeBand::D], 0.0);
        let total: f64 = shares.values().sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_percentages_of_empty_roster_is_none() {
        let store = RecordStore::new();
        let counts = grade_distribution(&store);
        assert!(percentages(&counts).is_none());
    }
}
