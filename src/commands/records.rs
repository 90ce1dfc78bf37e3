//! Commands that register students and record grades

use crate::{cli::types::ids::StudentRef, storage::Storage, Result};

/// Handle the add-student command
pub fn handle_add_student(
    store: &mut dyn Storage,
    name: &str,
    birth_year: Option<i32>,
) -> Result<String> {
    let id = store.add_student(name, birth_year)?;
    Ok(format!("Student {} added successfully (id {}).", name, id))
}

/// Handle the add-grade command
pub fn handle_add_grade(
    store: &mut dyn Storage,
    student: &StudentRef,
    subject: &str,
    score: i64,
) -> Result<String> {
    store.record_grade(student, subject, score)?;
    Ok(format!("Grade added: {} {} = {}.", student, subject, score))
}
