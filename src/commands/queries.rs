//! Query catalog command

use super::common::{render_table, to_json};
use crate::{
    catalog::{
        below_threshold, born_after, grades_of_student, per_subject_stats, ranked_averages, top_n,
    },
    cli::QueryCmd,
    models::RankedAverage,
    storage::Storage,
    util::format_average,
    Result,
};

/// Handle the query command
pub fn handle_query(store: &dyn Storage, query: &QueryCmd, as_json: bool) -> Result<String> {
    match query {
        QueryCmd::Grades { name } => {
            let rows = grades_of_student(store, name)?;
            if as_json {
                return to_json(&rows);
            }
            let cells: Vec<Vec<String>> = rows
                .iter()
                .map(|r| vec![r.subject.clone(), r.score.to_string()])
                .collect();
            Ok(render_table(
                &format!("Grades of {}", name),
                &["Subject", "Score"],
                &cells,
            ))
        }
        QueryCmd::Ranked => {
            let rows = ranked_averages(store)?;
            if as_json {
                return to_json(&rows);
            }
            Ok(render_ranked("Student averages", &rows, true))
        }
        QueryCmd::BornAfter { year } => {
            let rows = born_after(store, *year)?;
            if as_json {
                return to_json(&rows);
            }
            let cells: Vec<Vec<String>> = rows
                .iter()
                .map(|r| vec![r.name.clone(), r.birth_year.to_string()])
                .collect();
            Ok(render_table(
                &format!("Students born after {}", year),
                &["Student", "Birth year"],
                &cells,
            ))
        }
        QueryCmd::Subjects => {
            let rows = per_subject_stats(store)?;
            if as_json {
                return to_json(&rows);
            }
            let cells: Vec<Vec<String>> = rows
                .iter()
                .map(|r| {
                    vec![
                        r.subject.clone(),
                        r.grade_count.to_string(),
                        format_average(Some(r.average), 2),
                    ]
                })
                .collect();
            Ok(render_table(
                "Average grade by subject",
                &["Subject", "Grades", "Average"],
                &cells,
            ))
        }
        QueryCmd::Top { n } => {
            let rows = top_n(store, *n)?;
            if as_json {
                return to_json(&rows);
            }
            Ok(render_ranked(&format!("Top {} students", n), &rows, false))
        }
        QueryCmd::Below { threshold } => {
            let names = below_threshold(store, *threshold)?;
            if as_json {
                return to_json(&names);
            }
            let cells: Vec<Vec<String>> = names.into_iter().map(|n| vec![n]).collect();
            Ok(render_table(
                &format!("Students with grades below {}", threshold),
                &["Student"],
                &cells,
            ))
        }
    }
}

fn render_ranked(title: &str, rows: &[RankedAverage], with_count: bool) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            let mut row = vec![r.name.clone()];
            if with_count {
                row.push(r.grade_count.to_string());
            }
            row.push(format_average(r.average, 2));
            row
        })
        .collect();

    let headers: &[&str] = if with_count {
        &["Student", "Grades", "Average"]
    } else {
        &["Student", "Average"]
    };
    render_table(title, headers, &cells)
}
