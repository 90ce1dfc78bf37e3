//! Common utilities and helper functions shared across commands.

use serde::Serialize;

use crate::{
    cli::types::backend::Backend,
    storage::{MemoryStore, Storage, StudentDatabase},
    Result,
};
use std::path::Path;
use tracing::info;

const RULE_WIDTH: usize = 60;

/// Open the store selected on the command line.
pub fn open_store(backend: Backend, db: Option<&Path>) -> Result<Box<dyn Storage>> {
    match backend {
        Backend::Memory => {
            info!("using transient in-memory store");
            Ok(Box::new(MemoryStore::new()))
        }
        Backend::Sqlite => {
            let path = StudentDatabase::database_path(db)?;
            Ok(Box::new(StudentDatabase::open(&path)?))
        }
    }
}

/// Pretty JSON for any serializable output.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Render a titled table with left-aligned columns.
pub fn render_table(title: &str, headers: &[&str], rows: &[Vec<String>]) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mut lines = vec![
        "=".repeat(RULE_WIDTH),
        title.to_uppercase(),
        rule.clone(),
        join_cells(headers.iter().copied()),
        rule,
    ];

    if rows.is_empty() {
        lines.push("(no rows)".to_string());
    }
    lines.extend(rows.iter().map(|row| join_cells(row.iter().map(String::as_str))));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn join_cells<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    cells
        .map(|c| format!("{:<20}", c))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}
