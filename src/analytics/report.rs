//! Student report composed from aggregates and summary statistics

use super::aggregate::{aggregate, cross_student_stats, CrossStudentStats, StudentRecord};
use crate::util::{format_average, round_to};
use serde::Serialize;
use std::fmt;

/// Decimal places used when presenting report averages.
pub const REPORT_PRECISION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLine {
    pub name: String,
    /// Rounded to one decimal; `None` for students without grades
    pub average: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub students: Vec<ReportLine>,
    pub summary: CrossStudentStats,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

/// Build the report for `records` in store order.
///
/// Statistics are computed at full precision and only rounded for
/// presentation.
pub fn generate_report(records: &[StudentRecord]) -> Report {
    let aggregates = aggregate(records);

    let students = aggregates
        .iter()
        .map(|a| ReportLine {
            name: a.student_name.clone(),
            average: a.average.map(|v| round_to(v, REPORT_PRECISION)),
        })
        .collect();

    let summary = match cross_student_stats(&aggregates) {
        CrossStudentStats::NoData => CrossStudentStats::NoData,
        CrossStudentStats::Computed {
            max,
            min,
            overall_mean,
        } => CrossStudentStats::Computed {
            max: round_to(max, REPORT_PRECISION),
            min: round_to(min, REPORT_PRECISION),
            overall_mean: round_to(overall_mean, REPORT_PRECISION),
        },
    };

    Report { students, summary }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let places = REPORT_PRECISION as usize;

        if self.students.is_empty() {
            return writeln!(f, "No students in the system.");
        }

        writeln!(f, "--- Student Report ---")?;
        for line in &self.students {
            writeln!(
                f,
                "{}'s average grade is {}.",
                line.name,
                format_average(line.average, places)
            )?;
        }

        match self.summary {
            CrossStudentStats::NoData => writeln!(f, "\nNo grades available for statistics."),
            CrossStudentStats::Computed {
                max,
                min,
                overall_mean,
            } => {
                writeln!(f, "\n--- Summary ---")?;
                writeln!(f, "Max average: {:.*}", places, max)?;
                writeln!(f, "Min average: {:.*}", places, min)?;
                writeln!(f, "Overall average: {:.*}", places, overall_mean)
            }
        }
    }
}
