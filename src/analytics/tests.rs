//! Unit tests for aggregation, ranking and reporting

use super::*;
use crate::{
    error::RecordsError,
    storage::{GradeEntry, MemoryStore, Storage, Student},
    StudentId,
};
use std::cmp::Ordering;

fn record(id: i64, name: &str, scores: &[u8]) -> StudentRecord {
    StudentRecord {
        student: Student {
            id: StudentId::new(id),
            name: name.to_string(),
            birth_year: None,
        },
        grades: scores
            .iter()
            .enumerate()
            .map(|(i, score)| GradeEntry {
                student_id: StudentId::new(id),
                subject: format!("Subject {}", i),
                score: *score,
            })
            .collect(),
    }
}

/// Alice with Math=88, English=92, Science=85 and Bob with no grades
fn alice_and_bob() -> MemoryStore {
    let mut store = MemoryStore::new();
    store.add_student("Alice", None).unwrap();
    store.add_student("Bob", None).unwrap();
    store.record_grade(&"Alice".into(), "Math", 88).unwrap();
    store.record_grade(&"Alice".into(), "English", 92).unwrap();
    store.record_grade(&"Alice".into(), "Science", 85).unwrap();
    store
}

#[cfg(test)]
mod aggregate_tests {
    use super::*;

    #[test]
    fn test_average_of_empty_is_absent() {
        assert_eq!(average_of(&[]), None);
    }

    #[test]
    fn test_average_counts_repeated_subjects() {
        let grades = vec![
            GradeEntry {
                student_id: StudentId::new(1),
                subject: "Math".to_string(),
                score: 60,
            },
            GradeEntry {
                student_id: StudentId::new(1),
                subject: "Math".to_string(),
                score: 100,
            },
            GradeEntry {
                student_id: StudentId::new(1),
                subject: "Art".to_string(),
                score: 50,
            },
        ];
        assert_eq!(average_of(&grades), Some(70.0));
    }

    #[test]
    fn test_student_average_scenario() {
        let store = alice_and_bob();

        let alice = student_average(&store, &"Alice".into()).unwrap().unwrap();
        assert_eq!(crate::util::round_to(alice, 1), 88.3);
        assert!((alice - 265.0 / 3.0).abs() < 1e-9);

        assert_eq!(student_average(&store, &"Bob".into()).unwrap(), None);
    }

    #[test]
    fn test_student_average_unknown_student() {
        let store = alice_and_bob();
        assert!(matches!(
            student_average(&store, &"Zed".into()),
            Err(RecordsError::NotFound { .. })
        ));
        assert!(matches!(
            student_average(&store, &StudentId::new(40).into()),
            Err(RecordsError::NotFound { .. })
        ));
    }

    #[test]
    fn test_load_records_keeps_store_order() {
        let store = alice_and_bob();
        let records = load_records(&store).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].student.name, "Alice");
        assert_eq!(records[0].grades.len(), 3);
        assert_eq!(records[1].student.name, "Bob");
        assert!(records[1].grades.is_empty());
    }

    #[test]
    fn test_aggregate_records() {
        let aggregates = aggregate(&[record(1, "A", &[80, 90]), record(2, "B", &[])]);
        assert_eq!(
            aggregates,
            vec![
                AggregateRecord {
                    student_name: "A".to_string(),
                    average: Some(85.0),
                    grade_count: 2,
                },
                AggregateRecord {
                    student_name: "B".to_string(),
                    average: None,
                    grade_count: 0,
                },
            ]
        );
    }

    #[test]
    fn test_cross_student_stats_is_two_level_mean() {
        // A: 100 (one grade), B: 50, 50, 50 (three grades)
        // Mean of averages = 75, mean of raw scores would be 62.5
        let aggregates = aggregate(&[
            record(1, "A", &[100]),
            record(2, "B", &[50, 50, 50]),
            record(3, "C", &[]),
        ]);

        match cross_student_stats(&aggregates) {
            CrossStudentStats::Computed {
                max,
                min,
                overall_mean,
            } => {
                assert_eq!(max, 100.0);
                assert_eq!(min, 50.0);
                assert_eq!(overall_mean, 75.0);
            }
            CrossStudentStats::NoData => panic!("Expected computed statistics"),
        }
    }

    #[test]
    fn test_cross_student_stats_without_grades() {
        let aggregates = aggregate(&[record(1, "A", &[]), record(2, "B", &[])]);
        assert!(cross_student_stats(&aggregates).is_no_data());
        assert!(cross_student_stats(&[]).is_no_data());
    }
}

#[cfg(test)]
mod ranking_tests {
    use super::*;

    #[test]
    fn test_compare_averages_sentinel() {
        assert_eq!(compare_averages(None, Some(1.0)), Ordering::Less);
        assert_eq!(compare_averages(Some(1.0), None), Ordering::Greater);
        assert_eq!(compare_averages(None, None), Ordering::Equal);
        assert_eq!(compare_averages(Some(2.0), Some(1.0)), Ordering::Greater);
    }

    #[test]
    fn test_rank_order_puts_highest_first() {
        let mut averages = vec![Some(70.0), None, Some(90.0), Some(80.0)];
        averages.sort_by(|a, b| rank_order(*a, *b));
        assert_eq!(averages, vec![Some(90.0), Some(80.0), Some(70.0), None]);
    }

    #[test]
    fn test_top_student_scenario() {
        let records = load_records(&alice_and_bob()).unwrap();
        let top = top_student(&records);
        let (student, average) = top.winner().unwrap();
        assert_eq!(student.name, "Alice");
        assert!((average - 265.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_top_student_ignores_grade_less_students() {
        let records = vec![record(1, "NoGrades", &[]), record(2, "Low", &[1])];
        let top = top_student(&records);
        assert_eq!(top.winner().unwrap().0.name, "Low");
    }

    #[test]
    fn test_top_student_tie_goes_to_first_registered() {
        let records = vec![
            record(1, "First", &[90, 80]),
            record(2, "Second", &[85, 85]),
            record(3, "Third", &[70]),
        ];
        assert_eq!(top_student(&records).winner().unwrap().0.name, "First");

        let reversed = vec![records[1].clone(), records[0].clone()];
        assert_eq!(top_student(&reversed).winner().unwrap().0.name, "Second");
    }

    #[test]
    fn test_top_student_empty_roster() {
        let top = top_student(&[]);
        assert_eq!(top, TopStudent::EmptyRoster);
        assert!(matches!(top.into_result(), Err(RecordsError::EmptyRoster)));
    }

    #[test]
    fn test_top_student_no_eligible_student() {
        let top = top_student(&[record(1, "A", &[]), record(2, "B", &[])]);
        assert_eq!(top, TopStudent::NoEligibleStudent);
        assert!(top.winner().is_none());
        assert!(matches!(
            top.into_result(),
            Err(RecordsError::NoEligibleStudent)
        ));
    }

    #[test]
    fn test_top_student_serializes_with_status_tag() {
        let json = serde_json::to_value(TopStudent::EmptyRoster).unwrap();
        assert_eq!(json["status"], "empty_roster");
    }
}

#[cfg(test)]
mod report_tests {
    use super::*;

    #[test]
    fn test_report_scenario() {
        let records = load_records(&alice_and_bob()).unwrap();
        let report = generate_report(&records);

        assert_eq!(
            report.students,
            vec![
                ReportLine {
                    name: "Alice".to_string(),
                    average: Some(88.3),
                },
                ReportLine {
                    name: "Bob".to_string(),
                    average: None,
                },
            ]
        );
        assert_eq!(
            report.summary,
            CrossStudentStats::Computed {
                max: 88.3,
                min: 88.3,
                overall_mean: 88.3,
            }
        );
    }

    #[test]
    fn test_report_empty_roster() {
        let report = generate_report(&[]);
        assert!(report.is_empty());
        assert!(report.summary.is_no_data());
        assert_eq!(report.to_string(), "No students in the system.\n");
    }

    #[test]
    fn test_report_without_grades_has_no_summary() {
        let report = generate_report(&[record(1, "A", &[])]);
        assert_eq!(report.students.len(), 1);
        assert!(report.summary.is_no_data());

        let text = report.to_string();
        assert!(text.contains("A's average grade is N/A."));
        assert!(text.contains("No grades available for statistics."));
    }

    #[test]
    fn test_report_text_rendering() {
        let report = generate_report(&[record(1, "A", &[90, 80]), record(2, "B", &[70])]);
        let text = report.to_string();

        assert!(text.starts_with("--- Student Report ---\n"));
        assert!(text.contains("A's average grade is 85.0."));
        assert!(text.contains("B's average grade is 70.0."));
        assert!(text.contains("Max average: 85.0"));
        assert!(text.contains("Min average: 70.0"));
        assert!(text.contains("Overall average: 77.5"));
    }

    #[test]
    fn test_report_is_pure() {
        let store = alice_and_bob();
        let first = generate_report(&load_records(&store).unwrap());
        let second = generate_report(&load_records(&store).unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn test_report_json_shape() {
        let report = generate_report(&[record(1, "A", &[])]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["students"][0]["name"], "A");
        assert!(json["students"][0]["average"].is_null());
        assert_eq!(json["summary"]["status"], "no_data");
    }
}
