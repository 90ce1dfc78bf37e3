//! Fixed catalog of read-only reporting queries
//!
//! Every query reads through the [`Storage`] trait, so results are the same
//! for any backend. On an empty store each query returns an empty list.

use std::collections::HashMap;

use crate::{
    analytics::{load_records, rank_order},
    error::{RecordsError, Result},
    models::{BirthYearRow, RankedAverage, SubjectScore, SubjectStats},
    storage::Storage,
    util::{mean, round_to},
};

/// Decimal places used for averages in catalog rows.
pub const CATALOG_PRECISION: u32 = 2;

/// All grades of one student, subjects ascending.
pub fn grades_of_student<S: Storage + ?Sized>(store: &S, name: &str) -> Result<Vec<SubjectScore>> {
    let student = store
        .find_student(name)?
        .ok_or_else(|| RecordsError::NotFound {
            student: name.to_string(),
        })?;

    let mut rows: Vec<SubjectScore> = store
        .list_grades(student.id)?
        .into_iter()
        .map(|g| SubjectScore {
            subject: g.subject,
            score: g.score,
        })
        .collect();
    rows.sort_by(|a, b| a.subject.cmp(&b.subject));
    Ok(rows)
}

/// Every student's average, highest first, students without grades last.
///
/// Students with equal averages keep registration order.
pub fn ranked_averages<S: Storage + ?Sized>(store: &S) -> Result<Vec<RankedAverage>> {
    let mut ranked: Vec<(Option<f64>, RankedAverage)> = load_records(store)?
        .into_iter()
        .map(|record| {
            let average = record.average();
            let row = RankedAverage {
                name: record.student.name,
                grade_count: record.grades.len(),
                average: average.map(|v| round_to(v, CATALOG_PRECISION)),
            };
            (average, row)
        })
        .collect();

    // Compare at full precision; the rounded value is only for display
    ranked.sort_by(|(a, _), (b, _)| rank_order(*a, *b));
    Ok(ranked.into_iter().map(|(_, row)| row).collect())
}

/// Students born strictly after `year`, oldest first.
pub fn born_after<S: Storage + ?Sized>(store: &S, year: i32) -> Result<Vec<BirthYearRow>> {
    let mut rows: Vec<BirthYearRow> = store
        .list_students()?
        .into_iter()
        .filter_map(|s| match s.birth_year {
            Some(birth_year) if birth_year > year => Some(BirthYearRow {
                name: s.name,
                birth_year,
            }),
            _ => None,
        })
        .collect();
    rows.sort_by_key(|row| row.birth_year);
    Ok(rows)
}

/// Grade count and average per subject across all students, highest average first.
pub fn per_subject_stats<S: Storage + ?Sized>(store: &S) -> Result<Vec<SubjectStats>> {
    // Subjects in first-seen order so ties stay deterministic
    let mut order: Vec<String> = Vec::new();
    let mut scores: HashMap<String, Vec<f64>> = HashMap::new();

    for record in load_records(store)? {
        for grade in record.grades {
            let bucket = scores.entry(grade.subject.clone()).or_insert_with(|| {
                order.push(grade.subject.clone());
                Vec::new()
            });
            bucket.push(f64::from(grade.score));
        }
    }

    let mut stats: Vec<(f64, SubjectStats)> = Vec::with_capacity(order.len());
    for subject in order {
        let values = scores.remove(&subject).unwrap_or_default();
        let Some(average) = mean(values.iter().copied()) else {
            continue;
        };
        stats.push((
            average,
            SubjectStats {
                subject,
                grade_count: values.len(),
                average: round_to(average, CATALOG_PRECISION),
            },
        ));
    }

    stats.sort_by(|(a, _), (b, _)| rank_order(Some(*a), Some(*b)));
    Ok(stats.into_iter().map(|(_, row)| row).collect())
}

/// The first `n` ranked averages among students that have grades.
pub fn top_n<S: Storage + ?Sized>(store: &S, n: usize) -> Result<Vec<RankedAverage>> {
    Ok(ranked_averages(store)?
        .into_iter()
        .filter(|row| row.grade_count > 0)
        .take(n)
        .collect())
}

/// Names of students with at least one score strictly below `threshold`, alphabetical.
pub fn below_threshold<S: Storage + ?Sized>(store: &S, threshold: i64) -> Result<Vec<String>> {
    let mut names: Vec<String> = load_records(store)?
        .into_iter()
        .filter(|record| {
            record
                .grades
                .iter()
                .any(|g| i64::from(g.score) < threshold)
        })
        .map(|record| record.student.name)
        .collect();
    names.sort();
    names.dedup();
    Ok(names)
}
