//! Data models for the storage layer

use crate::cli::types::ids::StudentId;
use serde::{Deserialize, Serialize};

/// A registered student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub birth_year: Option<i32>,
}

/// One recorded grade for a student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeEntry {
    pub student_id: StudentId,
    pub subject: String,
    pub score: u8,
}

/// Whether a store accepts more than one grade per (student, subject) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SubjectPolicy {
    /// Repeated subjects are kept as separate grades
    #[default]
    AllowRepeats,
    /// A second grade for the same subject is rejected with `DuplicateSubject`
    UniquePerStudent,
}

/// Student row for bulk loading: `(name, birth_year)`
pub type StudentSeed = (String, Option<i32>);

/// Grade row for bulk loading: `(student_name, subject, score)`
pub type GradeSeed = (String, String, i64);

/// Outcome of a bulk roster load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadSummary {
    pub students_added: usize,
    pub grades_added: usize,
    /// Names referenced by grade rows that matched no student
    pub skipped_grades: Vec<String>,
}
