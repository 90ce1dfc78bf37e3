//! Sample data loading and the end-to-end demo

use super::{queries::handle_query, reporting::handle_report, reporting::handle_top};
use crate::{
    cli::QueryCmd,
    storage::{sample::sample_roster, Storage},
    Result,
};
use tracing::info;

/// Handle the seed command
pub fn handle_seed(store: &mut dyn Storage, reset: bool) -> Result<String> {
    let (students, grades) = sample_roster();
    let summary = if reset {
        info!("replacing existing students and grades");
        store.replace_roster(&students, &grades)?
    } else {
        store.load_roster(&students, &grades)?
    };
    info!(
        students = summary.students_added,
        grades = summary.grades_added,
        "loaded sample roster"
    );

    let mut message = format!(
        "Added {} students and {} grades.",
        summary.students_added, summary.grades_added
    );
    if !summary.skipped_grades.is_empty() {
        message.push_str(&format!(
            " Skipped {} grades for unknown students.",
            summary.skipped_grades.len()
        ));
    }
    Ok(message)
}

/// Queries run by the demo, with the sample roster's parameters
pub fn demo_queries() -> Vec<QueryCmd> {
    vec![
        QueryCmd::Grades {
            name: "Alice Johnson".to_string(),
        },
        QueryCmd::Ranked,
        QueryCmd::BornAfter { year: 2004 },
        QueryCmd::Subjects,
        QueryCmd::Top { n: 3 },
        QueryCmd::Below { threshold: 80 },
    ]
}

/// Handle the demo command: reset, seed, then print every view
pub fn handle_demo(store: &mut dyn Storage) -> Result<String> {
    let mut sections = vec![handle_seed(store, true)?];
    sections.push(handle_report(store, false)?);
    sections.push(handle_top(store, false)?);
    for query in demo_queries() {
        sections.push(handle_query(store, &query, false)?);
    }
    Ok(sections.join("\n"))
}
