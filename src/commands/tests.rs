//! Tests for command handlers

use super::{common::*, queries::*, records::*, reporting::*, seed::*, *};
use crate::{
    cli::{types::backend::Backend, QueryCmd},
    error::RecordsError,
    storage::{MemoryStore, Storage},
    StudentId, StudentRef,
};
use clap::Parser;

fn seeded() -> MemoryStore {
    let mut store = MemoryStore::new();
    handle_seed(&mut store, false).unwrap();
    store
}

#[test]
fn test_add_student_and_grade_messages() {
    let mut store = MemoryStore::new();
    let added = handle_add_student(&mut store, "Alice", Some(2005)).unwrap();
    assert_eq!(added, "Student Alice added successfully (id 1).");

    let graded = handle_add_grade(&mut store, &"Alice".into(), "Math", 88).unwrap();
    assert_eq!(graded, "Grade added: Alice Math = 88.");
}

#[test]
fn test_add_grade_out_of_range_leaves_store_unchanged() {
    let mut store = MemoryStore::new();
    handle_add_student(&mut store, "Carol", None).unwrap();

    let err = handle_add_grade(&mut store, &"Carol".into(), "Math", 150).unwrap_err();
    assert!(matches!(err, RecordsError::OutOfRange { score: 150, .. }));

    let report = handle_report(&store, false).unwrap();
    assert!(report.contains("Carol's average grade is N/A."));
}

#[test]
fn test_seed_message() {
    let mut store = MemoryStore::new();
    assert_eq!(
        handle_seed(&mut store, false).unwrap(),
        "Added 9 students and 27 grades."
    );
}

#[test]
fn test_seed_twice_without_reset_fails_cleanly() {
    let mut store = seeded();
    assert!(matches!(
        handle_seed(&mut store, false),
        Err(RecordsError::DuplicateName { .. })
    ));
    assert!(handle_seed(&mut store, true).is_ok());
}

#[test]
fn test_seed_reset_replaces_existing_roster() {
    let mut store = MemoryStore::new();
    handle_add_student(&mut store, "Zoe Park", None).unwrap();

    assert_eq!(
        handle_seed(&mut store, true).unwrap(),
        "Added 9 students and 27 grades."
    );
    let students = store.list_students().unwrap();
    assert_eq!(students.len(), 9);
    assert!(students.iter().all(|s| s.name != "Zoe Park"));
    assert_eq!(students[0].id, StudentId::new(1));
}

#[test]
fn test_top_rendering() {
    let store = seeded();
    assert_eq!(
        handle_top(&store, false).unwrap(),
        "Top student: Isabella Martinez with average grade: 92.3"
    );

    let empty = MemoryStore::new();
    assert_eq!(
        handle_top(&empty, false).unwrap(),
        "No students in the system."
    );

    let mut no_grades = MemoryStore::new();
    handle_add_student(&mut no_grades, "Bob", None).unwrap();
    assert_eq!(
        handle_top(&no_grades, false).unwrap(),
        "No students with grades available."
    );
}

#[test]
fn test_top_json() {
    let store = seeded();
    let json: serde_json::Value = serde_json::from_str(&handle_top(&store, true).unwrap()).unwrap();
    assert_eq!(json["status"], "winner");
    assert_eq!(json["student"]["name"], "Isabella Martinez");
}

#[test]
fn test_report_json_round_values() {
    let store = seeded();
    let json: serde_json::Value =
        serde_json::from_str(&handle_report(&store, true).unwrap()).unwrap();
    assert_eq!(json["students"].as_array().unwrap().len(), 9);
    assert_eq!(json["students"][0]["average"], 88.3);
    assert_eq!(json["summary"]["status"], "computed");
}

#[test]
fn test_query_text_tables() {
    let store = seeded();

    let below = handle_query(&store, &QueryCmd::Below { threshold: 80 }, false).unwrap();
    assert!(below.contains("STUDENTS WITH GRADES BELOW 80"));
    assert!(below.contains("Brian Smith"));
    assert!(!below.contains("Alice Johnson"));

    let ranked = handle_query(&store, &QueryCmd::Ranked, false).unwrap();
    assert!(ranked.contains("92.33"));
}

#[test]
fn test_query_json() {
    let store = seeded();
    let out = handle_query(&store, &QueryCmd::Top { n: 2 }, true).unwrap();
    let rows: Vec<crate::models::RankedAverage> = serde_json::from_str(&out).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Isabella Martinez");
}

#[test]
fn test_query_on_empty_store_renders_no_rows() {
    let store = MemoryStore::new();
    let out = handle_query(&store, &QueryCmd::Subjects, false).unwrap();
    assert!(out.contains("(no rows)"));
}

#[test]
fn test_grades_query_unknown_student() {
    let store = seeded();
    let query = QueryCmd::Grades {
        name: "Nobody".to_string(),
    };
    assert!(matches!(
        handle_query(&store, &query, false),
        Err(RecordsError::NotFound { .. })
    ));
}

#[test]
fn test_demo_runs_every_view() {
    let mut store = MemoryStore::new();
    let out = handle_demo(&mut store).unwrap();

    assert!(out.contains("--- Student Report ---"));
    assert!(out.contains("Top student: Isabella Martinez"));
    assert!(out.contains("GRADES OF ALICE JOHNSON"));
    assert!(out.contains("STUDENTS BORN AFTER 2004"));
    assert!(out.contains("AVERAGE GRADE BY SUBJECT"));
    assert!(out.contains("TOP 3 STUDENTS"));
    assert_eq!(demo_queries().len(), 6);
}

#[test]
fn test_demo_is_repeatable() {
    let mut store = MemoryStore::new();
    let first = handle_demo(&mut store).unwrap();
    let second = handle_demo(&mut store).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_render_table_layout() {
    let out = render_table(
        "Example",
        &["A", "B"],
        &[vec!["x".to_string(), "1".to_string()]],
    );
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "=".repeat(60));
    assert_eq!(lines[1], "EXAMPLE");
    assert_eq!(lines[3], format!("{:<20} | B", "A"));
    assert_eq!(lines[5], format!("{:<20} | 1", "x"));
    assert_eq!(lines.len(), 6);
    assert!(out.ends_with('\n'));
}

#[test]
fn test_open_memory_store() {
    let store = open_store(Backend::Memory, None).unwrap();
    assert!(store.list_students().unwrap().is_empty());
}

#[test]
fn test_run_dispatches_parsed_commands() {
    let mut store = MemoryStore::new();

    let app = Records::parse_from(["student-records", "add-student", "Alice", "--birth-year", "2005"]);
    run(&app, &mut store).unwrap();

    let app = Records::parse_from(["student-records", "add-grade", "#1", "Math", "88"]);
    run(&app, &mut store).unwrap();

    let app = Records::parse_from(["student-records", "query", "grades", "Alice", "--json"]);
    let out = run(&app, &mut store).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json[0]["subject"], "Math");
    assert_eq!(json[0]["score"], 88);
}

#[test]
fn test_cli_parses_negative_score() {
    let app = Records::parse_from(["student-records", "add-grade", "Bob", "Math", "-5"]);
    match app.command {
        Commands::AddGrade { score, .. } => assert_eq!(score, -5),
        other => panic!("Expected AddGrade, got {:?}", other),
    }
}

#[test]
fn test_cli_global_flags() {
    let app = Records::parse_from(["student-records", "report", "--backend", "memory", "-v"]);
    assert_eq!(app.backend, Backend::Memory);
    assert!(app.verbose);
    assert!(app.db.is_none());
}

#[test]
fn test_cli_student_ref_accepts_id_and_name() {
    let app = Records::parse_from(["student-records", "add-grade", "#3", "Math", "88"]);
    match app.command {
        Commands::AddGrade { student, .. } => {
            assert_eq!(student, StudentRef::Id(StudentId::new(3)))
        }
        other => panic!("Expected AddGrade, got {:?}", other),
    }

    let app = Records::parse_from(["student-records", "add-grade", "Alice", "Math", "88"]);
    match app.command {
        Commands::AddGrade { student, .. } => {
            assert_eq!(student, StudentRef::Name("Alice".to_string()))
        }
        other => panic!("Expected AddGrade, got {:?}", other),
    }
}

#[test]
fn test_cli_rejects_malformed_student_id() {
    assert!(Records::try_parse_from(["student-records", "add-grade", "#abc", "Math", "88"]).is_err());
}
