//! Database schema and connection management

use crate::{
    error::{RecordsError, Result},
    DB_PATH_ENV_VAR,
};
use dirs::data_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::info;

/// SQLite-backed student store
pub struct StudentDatabase {
    pub(crate) conn: Connection,
}

impl StudentDatabase {
    /// Open the database at the default location and ensure tables exist
    pub fn new() -> Result<Self> {
        let db_path = Self::database_path(None)?;
        Self::open(&db_path)
    }

    /// Open (creating if needed) the database file at `path`
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure the parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        info!(path = %path.display(), "opened student database");
        Self::from_connection(conn)
    }

    /// Create a private in-memory database
    pub fn new_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        // Referential integrity is off by default in SQLite
        conn.execute_batch("PRAGMA foreign_keys = ON")?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        info!("schema ready");
        Ok(db)
    }

    /// Resolve the database path.
    ///
    /// An explicit path wins, then `STUDENT_RECORDS_DB`, then
    /// `<data dir>/student-records/students.db`.
    pub fn database_path(explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }

        if let Ok(from_env) = std::env::var(DB_PATH_ENV_VAR) {
            if !from_env.trim().is_empty() {
                return Ok(PathBuf::from(from_env));
            }
        }

        let data_dir = data_dir().ok_or_else(|| RecordsError::Config {
            message: "Could not determine data directory".to_string(),
        })?;
        Ok(data_dir.join("student-records").join("students.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS students (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                full_name TEXT NOT NULL UNIQUE,
                birth_year INTEGER
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS grades (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                student_id INTEGER NOT NULL,
                subject TEXT NOT NULL,
                grade INTEGER NOT NULL CHECK (grade >= 1 AND grade <= 100),
                FOREIGN KEY (student_id) REFERENCES students(id),
                UNIQUE (student_id, subject)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_grades_student
             ON grades(student_id)",
            [],
        )?;

        Ok(())
    }
}
