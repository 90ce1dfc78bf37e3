//! Student Records Library
//!
//! Models students and their per-subject grades, validates input, computes
//! aggregate statistics, ranks students, and answers a fixed catalog of
//! reporting queries. Everything is written against the [`storage::Storage`]
//! trait, so the transient and SQLite backends are interchangeable.
//!
//! ## Features
//!
//! - **Validation**: Non-empty unique names, non-empty subjects, scores 1-100
//! - **Two Backends**: In-memory [`storage::MemoryStore`] and SQLite [`storage::StudentDatabase`]
//! - **Aggregation**: Per-student averages that stay absent (not zero) without grades
//! - **Ranking**: Top student with a sentinel for grade-less students and first-wins ties
//! - **Reports**: Structured report with max/min/mean-of-averages summary
//! - **Query Catalog**: Grades by student, ranked averages, birth-year filter,
//!   per-subject statistics, top N and below-threshold
//!
//! ## Quick Start
//!
//! ```rust
//! use student_records::{analytics, catalog, storage::{MemoryStore, Storage}};
//!
//! # fn example() -> student_records::Result<()> {
//! let mut store = MemoryStore::new();
//! store.add_student("Alice", Some(2005))?;
//! store.add_student("Bob", None)?;
//! store.record_grade(&"Alice".into(), "Math", 88)?;
//! store.record_grade(&"Alice".into(), "English", 92)?;
//!
//! let records = analytics::load_records(&store)?;
//! let top = analytics::top_student(&records).into_result()?;
//! assert_eq!(top.0.name, "Alice");
//!
//! let ranked = catalog::ranked_averages(&store)?;
//! assert_eq!(ranked[1].average, None);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a specific database file:
//! ```bash
//! export STUDENT_RECORDS_DB=/path/to/students.db
//! ```

pub mod analytics;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod models;
pub mod storage;
pub mod util;
pub mod validation;

// Re-export commonly used types
pub use cli::types::ids::{StudentId, StudentRef};
pub use error::{RecordsError, Result};
pub use storage::{GradeEntry, MemoryStore, Storage, Student, StudentDatabase};

pub const DB_PATH_ENV_VAR: &str = "STUDENT_RECORDS_DB";
