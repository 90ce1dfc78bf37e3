//! Storage layer for student records
//!
//! This module defines the storage contract the rest of the crate is written
//! against, and two interchangeable backends:
//! - `memory`: Transient insertion-ordered store
//! - `schema`: SQLite connection and schema management
//! - `queries`: `Storage` implementation for the SQLite database
//! - `models`: Data structures
//! - `sample`: The sample roster used by `seed` and `demo`

pub mod memory;
pub mod models;
pub mod queries;
pub mod sample;
pub mod schema;


use crate::{
    cli::types::ids::{StudentId, StudentRef},
    Result,
};

// Re-export the main types and backends for easy access
pub use memory::MemoryStore;
pub use models::*;
pub use schema::StudentDatabase;

/// Contract every student store honors.
///
/// Students come back in registration order and a grade never references a
/// student that does not exist. Each mutating call either succeeds completely
/// or leaves the store unchanged.
pub trait Storage {
    /// Register a student with no grades.
    ///
    /// Fails with `EmptyName` or `DuplicateName`.
    fn add_student(&mut self, name: &str, birth_year: Option<i32>) -> Result<StudentId>;

    /// Append a grade for an existing student.
    ///
    /// Fails with `NotFound`, `EmptySubject`, `OutOfRange`, or
    /// `DuplicateSubject` when the store's policy is `UniquePerStudent`.
    /// An unknown student is reported before any problem with the grade.
    fn record_grade(&mut self, student: &StudentRef, subject: &str, score: i64) -> Result<()>;

    /// All students in registration order.
    fn list_students(&self) -> Result<Vec<Student>>;

    /// Grades of one student in recording order; `NotFound` for unknown ids.
    fn list_grades(&self, student_id: StudentId) -> Result<Vec<GradeEntry>>;

    fn subject_policy(&self) -> SubjectPolicy;

    /// Register students, then their grades, as one unit.
    ///
    /// Grade rows naming an unknown student are skipped and reported in the
    /// summary. Any other failure leaves the store unchanged.
    fn load_roster(&mut self, students: &[StudentSeed], grades: &[GradeSeed])
        -> Result<LoadSummary>;

    /// Swap the whole contents for the given roster as one unit.
    ///
    /// Ids restart from 1. On failure the previous contents stay in place.
    fn replace_roster(
        &mut self,
        students: &[StudentSeed],
        grades: &[GradeSeed],
    ) -> Result<LoadSummary>;

    /// Remove every student and grade.
    fn clear_all(&mut self) -> Result<()>;

    /// Look a student up by exact name.
    fn find_student(&self, name: &str) -> Result<Option<Student>> {
        Ok(self
            .list_students()?
            .into_iter()
            .find(|student| student.name == name))
    }
}
