//! Top-student selection
//!
//! Students are ordered by average with a sentinel for "no grades" that sits
//! below every real average. Among equal averages the earlier-registered
//! student ranks first.

use super::aggregate::StudentRecord;
use crate::{
    error::{RecordsError, Result},
    storage::Student,
};
use serde::Serialize;
use std::cmp::Ordering;

/// Total order on optional averages: `None` is below any `Some`.
pub fn compare_averages(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

/// Ordering for ranked lists: higher averages first, grade-less last.
///
/// Meant for a stable sort, which keeps registration order among ties.
pub fn rank_order(a: Option<f64>, b: Option<f64>) -> Ordering {
    compare_averages(b, a)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TopStudent {
    Winner { student: Student, average: f64 },
    /// Students exist but none has a grade
    NoEligibleStudent,
    /// No students are registered
    EmptyRoster,
}

impl TopStudent {
    pub fn winner(&self) -> Option<(&Student, f64)> {
        match self {
            TopStudent::Winner { student, average } => Some((student, *average)),
            _ => None,
        }
    }

    /// Turn the two empty outcomes into their matching errors.
    pub fn into_result(self) -> Result<(Student, f64)> {
        match self {
            TopStudent::Winner { student, average } => Ok((student, average)),
            TopStudent::NoEligibleStudent => Err(RecordsError::NoEligibleStudent),
            TopStudent::EmptyRoster => Err(RecordsError::EmptyRoster),
        }
    }
}

/// The student with the highest average; the first one wins ties.
pub fn top_student(records: &[StudentRecord]) -> TopStudent {
    if records.is_empty() {
        return TopStudent::EmptyRoster;
    }

    let mut best: Option<(&StudentRecord, f64)> = None;
    for record in records {
        let Some(average) = record.average() else {
            continue;
        };
        // Strictly greater, so an earlier student keeps the lead on a tie
        let leads = match best {
            Some((_, best_average)) => average.total_cmp(&best_average) == Ordering::Greater,
            None => true,
        };
        if leads {
            best = Some((record, average));
        }
    }

    match best {
        Some((record, average)) => TopStudent::Winner {
            student: record.student.clone(),
            average,
        },
        None => TopStudent::NoEligibleStudent,
    }
}
