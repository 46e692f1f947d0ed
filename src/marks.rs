//! Fixed mark-range buckets used for distribution reporting.

use serde::Serialize;
use std::fmt;

/// Eight half-open mark ranges, lowest first. The top range is open-ended
/// upward so marks above 100 still land in a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MarkRange {
    Below30,
    Thirties,
    Forties,
    Fifties,
    Sixties,
    Seventies,
    Eighties,
    NinetyPlus,
}

impl MarkRange {
    /// All ranges in reporting order. Distribution output iterates this.
    pub const ALL: [MarkRange; 8] = [
        MarkRange::Below30,
        MarkRange::Thirties,
        MarkRange::Forties,
        MarkRange::Fifties,
        MarkRange::Sixties,
        MarkRange::Seventies,
        MarkRange::Eighties,
        MarkRange::NinetyPlus,
    ];

    /// Chart label for the range.
    pub fn label(&self) -> &'static str {
        match self {
            MarkRange::Below30 => "0-29",
            MarkRange::Thirties => "30-39",
            MarkRange::Forties => "40-49",
            MarkRange::Fifties => "50-59",
            MarkRange::Sixties => "60-69",
            MarkRange::Seventies => "70-79",
            MarkRange::Eighties => "80-89",
            MarkRange::NinetyPlus => "90-100",
        }
    }
}

impl fmt::Display for MarkRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Assigns a unit mark to its range bucket.
///
/// Lower bounds are inclusive, matching the grade thresholds: 59.999 falls
/// in 50-59, 60.0 in 60-69.
pub fn bucket_mark(mark: f64) -> MarkRange {
    match mark {
        m if m < 30.0 => MarkRange::Below30,
        m if m < 40.0 => MarkRange::Thirties,
        m if m < 50.0 => MarkRange::Forties,
        m if m < 60.0 => MarkRange::Fifties,
        m if m < 70.0 => MarkRange::Sixties,
        m if m < 80.0 => MarkRange::Seventies,
        m if m < 90.0 => MarkRange::Eighties,
        _ => MarkRange::NinetyPlus,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(bucket_mark(0.0), MarkRange::Below30);
        assert_eq!(bucket_mark(29.999), MarkRange::Below30);
        assert_eq!(bucket_mark(30.0), MarkRange::Thirties);
        assert_eq!(bucket_mark(39.999), MarkRange::Thirties);
        assert_eq!(bucket_mark(40.0), MarkRange::Forties);
        assert_eq!(bucket_mark(50.0), MarkRange::Fifties);
        assert_eq!(bucket_mark(59.999), MarkRange::Fifties);
        assert_eq!(bucket_mark(60.0), MarkRange::Sixties);
        assert_eq!(bucket_mark(70.0), MarkRange::Seventies);
        assert_eq!(bucket_mark(80.0), MarkRange::Eighties);
        assert_eq!(bucket_mark(89.999), MarkRange::Eighties);
        assert_eq!(bucket_mark(90.0), MarkRange::NinetyPlus);
    }

    #[test]
    fn test_top_bucket_is_open_ended() {
        assert_eq!(bucket_mark(100.0), MarkRange::NinetyPlus);
        assert_eq!(bucket_mark(105.5), MarkRange::NinetyPlus);
    }

    #[test]
    fn test_labels() {
        assert_eq!(MarkRange::Below30.to_string(), "0-29");
        assert_eq!(MarkRange::NinetyPlus.to_string(), "90-100");
    }
}
