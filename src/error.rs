//! Error types for the student records core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RecordsError>;

#[derive(Error, Debug)]
pub enum RecordsError {
    #[error("Student name must not be empty")]
    EmptyName,

    #[error("A student named '{name}' already exists")]
    DuplicateName { name: String },

    #[error("Student not found: {student}")]
    NotFound { student: String },

    #[error("Subject must not be empty")]
    EmptySubject,

    #[error("Score {score} is out of range ({min}-{max})")]
    OutOfRange { score: i64, min: i64, max: i64 },

    #[error("Student '{student}' already has a grade for {subject}")]
    DuplicateSubject { student: String, subject: String },

    #[error("No student has any grades yet")]
    NoEligibleStudent,

    #[error("No students are registered")]
    EmptyRoster,

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse student ID: {0}")]
    InvalidStudentId(#[from] std::num::ParseIntError),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl RecordsError {
    /// True for errors caused by caller input, where asking again can help.
    ///
    /// Infrastructure failures (database, IO, serialization, configuration)
    /// return `false`.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RecordsError::EmptyName
                | RecordsError::DuplicateName { .. }
                | RecordsError::NotFound { .. }
                | RecordsError::EmptySubject
                | RecordsError::OutOfRange { .. }
                | RecordsError::DuplicateSubject { .. }
                | RecordsError::InvalidStudentId(_)
        )
    }
}
