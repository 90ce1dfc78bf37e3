//! Analytics over records already read from storage
//!
//! - `aggregate`: Per-student averages and cross-student statistics
//! - `ranking`: Ordering of averages and top-student selection
//! - `report`: Presentable report built from the two above
//!
//! Nothing here touches a store except `load_records`, which only reads.

pub mod aggregate;
pub mod ranking;
pub mod report;

#[cfg(test)]
mod tests;

pub use aggregate::{
    aggregate, average_of, cross_student_stats, load_records, student_average, AggregateRecord,
    CrossStudentStats, StudentRecord,
};
pub use ranking::{compare_averages, rank_order, top_student, TopStudent};
pub use report::{generate_report, Report, ReportLine};
