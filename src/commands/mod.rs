//! Command implementations for the student records CLI
//!
//! Handlers return the text to print so the binary stays a thin shell.

pub mod common;
pub mod queries;
pub mod records;
pub mod reporting;
pub mod seed;

#[cfg(test)]
mod tests;

use crate::{
    cli::{Commands, Records},
    storage::Storage,
    Result,
};

/// Dispatch a parsed command line against an open store
pub fn run(app: &Records, store: &mut dyn Storage) -> Result<String> {
    match &app.command {
        Commands::AddStudent { name, birth_year } => {
            records::handle_add_student(store, name, *birth_year)
        }
        Commands::AddGrade {
            student,
            subject,
            score,
        } => records::handle_add_grade(store, student, subject, *score),
        Commands::Report { json } => reporting::handle_report(store, *json),
        Commands::Top { json } => reporting::handle_top(store, *json),
        Commands::Query { query, json } => queries::handle_query(store, query, *json),
        Commands::Seed { reset } => seed::handle_seed(store, *reset),
        Commands::Demo => seed::handle_demo(store),
    }
}
