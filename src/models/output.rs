//! Output rows returned by the query catalog, used for printing and JSON serialization.

use serde::{Deserialize, Serialize};

/// One grade of a single student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectScore {
    pub subject: String,
    pub score: u8,
}

/// A student's average across all their grades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAverage {
    pub name: String,
    pub grade_count: usize,
    /// Rounded to two decimals; `None` when the student has no grades.
    pub average: Option<f64>,
}

/// A student with a known birth year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthYearRow {
    pub name: String,
    pub birth_year: i32,
}

/// Grades for one subject pooled across every student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectStats {
    pub subject: String,
    pub grade_count: usize,
    /// Rounded to two decimals.
    pub average: f64,
}
