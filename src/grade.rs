//! Letter-grade classification for unit marks.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The five letter grades awarded for a unit, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum GradeBand {
    HD,
    D,
    C,
    P,
    N,
}

impl GradeBand {
    /// All bands in reporting order. Distribution output iterates this.
    pub const ALL: [GradeBand; 5] = [
        GradeBand::HD,
        GradeBand::D,
        GradeBand::C,
        GradeBand::P,
        GradeBand::N,
    ];
}

impl fmt::Display for GradeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GradeBand::HD => "HD",
            GradeBand::D => "D",
            GradeBand::C => "C",
            GradeBand::P => "P",
            GradeBand::N => "N",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognised grade '{0}', expected one of HD, D, C, P, N")]
pub struct ParseGradeError(String);

impl FromStr for GradeBand {
    type Err = ParseGradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "HD" => Ok(GradeBand::HD),
            "D" => Ok(GradeBand::D),
            "C" => Ok(GradeBand::C),
            "P" => Ok(GradeBand::P),
            "N" => Ok(GradeBand::N),
            _ => Err(ParseGradeError(s.to_string())),
        }
    }
}

/// Converts a unit mark into a letter grade.
///
/// | Range       | Grade |
/// |-------------|-------|
/// | >= 80       | HD    |
/// | >= 70       | D     |
/// | >= 60       | C     |
/// | >= 50       | P     |
/// | < 50        | N     |
pub fn classify_grade(mark: f64) -> GradeBand {
    match mark {
        m if m >= 80.0 => GradeBand::HD,
        m if m >= 70.0 => GradeBand::D,
        m if m >= 60.0 => GradeBand::C,
        m if m >= 50.0 => GradeBand::P,
        _ => GradeBand::N,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(classify_grade(100.0), GradeBand::HD);
        assert_eq!(classify_grade(80.0), GradeBand::HD);
        assert_eq!(classify_grade(79.999), GradeBand::D);
        assert_eq!(classify_grade(70.0), GradeBand::D);
        assert_eq!(classify_grade(69.999), GradeBand::C);
        assert_eq!(classify_grade(60.0), GradeBand::C);
        assert_eq!(classify_grade(59.999), GradeBand::P);
        assert_eq!(classify_grade(50.0), GradeBand::P);
        assert_eq!(classify_grade(49.999), GradeBand::N);
        assert_eq!(classify_grade(0.0), GradeBand::N);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("hd".parse::<GradeBand>(), Ok(GradeBand::HD));
        assert_eq!("Hd".parse::<GradeBand>(), Ok(GradeBand::HD));
        assert_eq!("n".parse::<GradeBand>(), Ok(GradeBand::N));
        assert!("X".parse::<GradeBand>().is_err());
        assert!("".parse::<GradeBand>().is_err());
    }

    #[test]
    fn test_display_round_trips_parse() {
        for band in GradeBand::ALL {
            assert_eq!(band.to_string().parse::<GradeBand>(), Ok(band));
        }
    }
}
