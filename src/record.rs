//! The student record held in the roster and persisted to CSV.

use serde::{Deserialize, Serialize};

/// A single student's result for the unit.
///
/// Field renames pin the CSV header row to
/// `student_number,student_surname,student_given_name,unit_mark`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    #[serde(rename = "student_number")]
    pub number: u32,
    #[serde(rename = "student_surname")]
    pub surname: String,
    #[serde(rename = "student_given_name")]
    pub given_name: String,
    #[serde(rename = "unit_mark")]
    pub mark: f64,
}

impl StudentRecord {
    pub fn new(number: u32, surname: &str, given_name: &str, mark: f64) -> Self {
        StudentRecord {
            number,
            surname: surname.to_string(),
            given_name: given_name.to_string(),
            mark,
        }
    }

    /// Display name, given name first.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.surname)
    }
}
