//! Identifier types for students.

use crate::error::{RecordsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for student identifiers assigned by a store.
///
/// Identifiers are stable for the lifetime of the store and increase in
/// registration order.
///
/// # Examples
///
/// ```rust
/// use student_records::StudentId;
///
/// let id = StudentId::new(7);
/// assert_eq!(id.as_i64(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StudentId(pub i64);

impl StudentId {
    /// Create a new StudentId from an i64 value.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying i64 value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StudentId {
    type Err = RecordsError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Reference to a student either by identifier or by exact name.
///
/// On the command line a leading `#` selects the identifier form:
/// `#3` is `StudentRef::Id(3)`, anything else is a name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StudentRef {
    Id(StudentId),
    Name(String),
}

impl fmt::Display for StudentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudentRef::Id(id) => write!(f, "#{}", id),
            StudentRef::Name(name) => write!(f, "{}", name),
        }
    }
}

impl FromStr for StudentRef {
    type Err = RecordsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.strip_prefix('#') {
            Some(id) => Ok(StudentRef::Id(id.parse()?)),
            None => Ok(StudentRef::Name(s.to_string())),
        }
    }
}

impl From<StudentId> for StudentRef {
    fn from(id: StudentId) -> Self {
        StudentRef::Id(id)
    }
}

impl From<&str> for StudentRef {
    fn from(name: &str) -> Self {
        StudentRef::Name(name.to_string())
    }
}

impl From<String> for StudentRef {
    fn from(name: String) -> Self {
        StudentRef::Name(name)
    }
}
