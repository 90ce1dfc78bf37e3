//! Sample roster for seeding a store

use super::models::{GradeSeed, StudentSeed};

const STUDENTS: [(&str, i32); 9] = [
    ("Alice Johnson", 2005),
    ("Brian Smith", 2004),
    ("Carla Reyes", 2006),
    ("Daniel Kim", 2005),
    ("Eva Thompson", 2003),
    ("Felix Nguyen", 2007),
    ("Grace Patel", 2005),
    ("Henry Lopez", 2004),
    ("Isabella Martinez", 2006),
];

const GRADES: [(&str, &str, i64); 27] = [
    ("Alice Johnson", "Math", 88),
    ("Alice Johnson", "English", 92),
    ("Alice Johnson", "Science", 85),
    ("Brian Smith", "Math", 75),
    ("Brian Smith", "History", 83),
    ("Brian Smith", "English", 79),
    ("Carla Reyes", "Science", 95),
    ("Carla Reyes", "Math", 91),
    ("Carla Reyes", "Art", 89),
    ("Daniel Kim", "Math", 84),
    ("Daniel Kim", "Science", 88),
    ("Daniel Kim", "Physical Education", 93),
    ("Eva Thompson", "English", 90),
    ("Eva Thompson", "History", 85),
    ("Eva Thompson", "Math", 88),
    ("Felix Nguyen", "Science", 72),
    ("Felix Nguyen", "Math", 78),
    ("Felix Nguyen", "English", 81),
    ("Grace Patel", "Art", 94),
    ("Grace Patel", "Science", 87),
    ("Grace Patel", "Math", 90),
    ("Henry Lopez", "History", 77),
    ("Henry Lopez", "Math", 83),
    ("Henry Lopez", "Science", 80),
    ("Isabella Martinez", "English", 96),
    ("Isabella Martinez", "Math", 89),
    ("Isabella Martinez", "Art", 92),
];

/// Nine students with three grades each.
pub fn sample_roster() -> (Vec<StudentSeed>, Vec<GradeSeed>) {
    let students = STUDENTS
        .iter()
        .map(|(name, year)| (name.to_string(), Some(*year)))
        .collect();
    let grades = GRADES
        .iter()
        .map(|(name, subject, score)| (name.to_string(), subject.to_string(), *score))
        .collect();
    (students, grades)
}
