//! Report and top-student commands

use super::common::to_json;
use crate::{
    analytics::{generate_report, load_records, top_student, TopStudent},
    storage::Storage,
    util::format_average,
    Result,
};

/// Handle the report command
pub fn handle_report(store: &dyn Storage, as_json: bool) -> Result<String> {
    let report = generate_report(&load_records(store)?);
    if as_json {
        return to_json(&report);
    }
    Ok(report.to_string())
}

/// Handle the top command
pub fn handle_top(store: &dyn Storage, as_json: bool) -> Result<String> {
    let top = top_student(&load_records(store)?);
    if as_json {
        return to_json(&top);
    }
    Ok(render_top(&top))
}

pub fn render_top(top: &TopStudent) -> String {
    match top {
        TopStudent::Winner { student, average } => format!(
            "Top student: {} with average grade: {}",
            student.name,
            format_average(Some(*average), 1)
        ),
        TopStudent::NoEligibleStudent => "No students with grades available.".to_string(),
        TopStudent::EmptyRoster => "No students in the system.".to_string(),
    }
}
