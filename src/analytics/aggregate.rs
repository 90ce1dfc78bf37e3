//! Per-student averages and cross-student statistics

use crate::{
    cli::types::ids::StudentRef,
    error::{RecordsError, Result},
    storage::{GradeEntry, Storage, Student},
    util::mean,
};
use serde::{Deserialize, Serialize};

/// A student together with every grade read from the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub student: Student,
    pub grades: Vec<GradeEntry>,
}

impl StudentRecord {
    pub fn average(&self) -> Option<f64> {
        average_of(&self.grades)
    }
}

/// Derived per-student summary; `average` is `None` when `grade_count == 0`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRecord {
    pub student_name: String,
    pub average: Option<f64>,
    pub grade_count: usize,
}

/// Max, min and mean of the defined per-student averages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CrossStudentStats {
    /// No student has any grade
    NoData,
    Computed {
        max: f64,
        min: f64,
        /// Mean of the per-student averages, not of the raw scores
        overall_mean: f64,
    },
}

impl CrossStudentStats {
    pub fn is_no_data(&self) -> bool {
        matches!(self, CrossStudentStats::NoData)
    }
}

/// Read every student and their grades, in store order.
pub fn load_records<S: Storage + ?Sized>(store: &S) -> Result<Vec<StudentRecord>> {
    let students = store.list_students()?;
    let mut records = Vec::with_capacity(students.len());
    for student in students {
        let grades = store.list_grades(student.id)?;
        records.push(StudentRecord { student, grades });
    }
    Ok(records)
}

/// Arithmetic mean of the scores; `None` when there are none.
///
/// Repeated subjects each count as a separate score.
pub fn average_of(grades: &[GradeEntry]) -> Option<f64> {
    mean(grades.iter().map(|g| f64::from(g.score)))
}

/// Average for a single student looked up in `store`.
pub fn student_average<S: Storage + ?Sized>(store: &S, student: &StudentRef) -> Result<Option<f64>> {
    let id = match student {
        StudentRef::Id(id) => *id,
        StudentRef::Name(name) => {
            store
                .find_student(name)?
                .ok_or_else(|| RecordsError::NotFound {
                    student: name.clone(),
                })?
                .id
        }
    };
    Ok(average_of(&store.list_grades(id)?))
}

pub fn aggregate(records: &[StudentRecord]) -> Vec<AggregateRecord> {
    records
        .iter()
        .map(|record| AggregateRecord {
            student_name: record.student.name.clone(),
            average: record.average(),
            grade_count: record.grades.len(),
        })
        .collect()
}

/// Statistics over the students that have an average.
pub fn cross_student_stats(records: &[AggregateRecord]) -> CrossStudentStats {
    let averages: Vec<f64> = records.iter().filter_map(|r| r.average).collect();

    let Some(overall_mean) = mean(averages.iter().copied()) else {
        return CrossStudentStats::NoData;
    };

    let max = averages.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = averages.iter().copied().fold(f64::INFINITY, f64::min);
    CrossStudentStats::Computed {
        max,
        min,
        overall_mean,
    }
}
