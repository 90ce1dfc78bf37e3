//! Input validation for student names, subjects and scores.

use crate::{
    error::{RecordsError, Result},
    storage::Storage,
};

/// Lowest accepted score (inclusive).
pub const MIN_SCORE: i64 = 1;
/// Highest accepted score (inclusive).
pub const MAX_SCORE: i64 = 100;

/// Reject blank or whitespace-only names.
pub fn check_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(RecordsError::EmptyName);
    }
    Ok(())
}

/// Validate a name for registration in `store`.
///
/// Names are compared exactly, so `"alice"` and `"Alice"` are different
/// students.
pub fn validate_name<S: Storage + ?Sized>(name: &str, store: &S) -> Result<()> {
    check_name(name)?;
    if store.find_student(name)?.is_some() {
        return Err(RecordsError::DuplicateName {
            name: name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_score(score: i64) -> Result<()> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(RecordsError::OutOfRange {
            score,
            min: MIN_SCORE,
            max: MAX_SCORE,
        });
    }
    Ok(())
}

pub fn validate_subject(subject: &str) -> Result<()> {
    if subject.trim().is_empty() {
        return Err(RecordsError::EmptySubject);
    }
    Ok(())
}

/// Validate a `(subject, score)` pair and narrow the score to its stored width.
pub(crate) fn validate_grade(subject: &str, score: i64) -> Result<u8> {
    validate_subject(subject)?;
    validate_score(score)?;
    // In range 1..=100 after validation.
    Ok(score as u8)
}
