//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::{backend::Backend, ids::StudentRef};

#[derive(Debug, Parser)]
#[clap(
    name = "student-records",
    about = "Student records and grade analytics"
)]
pub struct Records {
    /// Storage backend to use.
    #[clap(long, value_enum, default_value_t = Backend::default(), global = true)]
    pub backend: Backend,

    /// SQLite database file (or set `STUDENT_RECORDS_DB` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Enable debug logging.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Register a new student
    AddStudent {
        /// Full name, unique and case-sensitive.
        name: String,

        /// Year of birth.
        #[clap(long)]
        birth_year: Option<i32>,
    },

    /// Record a grade for a student
    AddGrade {
        /// Student name, or `#<id>` to select by ID.
        #[clap(value_parser = parse_student_ref)]
        student: StudentRef,

        /// Subject name.
        subject: String,

        /// Score between 1 and 100.
        #[clap(allow_negative_numbers = true)]
        score: i64,
    },

    /// Print every student's average and summary statistics
    Report {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Find the student with the highest average
    Top {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Run one of the reporting queries
    Query {
        #[clap(subcommand)]
        query: QueryCmd,

        /// Output results as JSON instead of text lines.
        #[clap(long, global = true)]
        json: bool,
    },

    /// Load the sample roster of nine students
    Seed {
        /// Replace all existing students and grades with the sample roster.
        #[clap(long)]
        reset: bool,
    },

    /// Seed a fresh store and run the report, top student and every query
    ///
    /// Wipes the selected store first. Pass `--backend memory` to leave an
    /// existing database file alone.
    Demo,
}

#[derive(Debug, Clone, Subcommand)]
pub enum QueryCmd {
    /// All grades of one student, by subject
    Grades {
        /// Exact student name.
        name: String,
    },

    /// Every student's average, highest first
    Ranked,

    /// Students born after the given year
    BornAfter {
        year: i32,
    },

    /// Average grade per subject across all students
    Subjects,

    /// The N students with the highest averages
    Top {
        #[clap(default_value_t = 3)]
        n: usize,
    },

    /// Students with at least one grade below the threshold
    Below {
        #[clap(default_value_t = 80)]
        threshold: i64,
    },
}

/// Parse a student reference with its `#<id>` form.
fn parse_student_ref(value: &str) -> std::result::Result<StudentRef, String> {
    value.parse::<StudentRef>().map_err(|e| e.to_string())
}
