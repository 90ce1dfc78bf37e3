//! Transient in-memory backend

use super::{models::*, Storage};
use crate::{
    cli::types::ids::{StudentId, StudentRef},
    error::{RecordsError, Result},
    validation::{validate_grade, validate_name},
};
use tracing::{debug, warn};

/// Insertion-ordered store that lives only as long as the process.
///
/// By default a student may hold several grades for the same subject; use
/// [`MemoryStore::with_policy`] to reject repeats the way the SQLite backend
/// does.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    students: Vec<Student>,
    grades: Vec<GradeEntry>,
    next_id: i64,
    policy: SubjectPolicy,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: SubjectPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    fn resolve(&self, student: &StudentRef) -> Result<&Student> {
        let found = match student {
            StudentRef::Id(id) => self.students.iter().find(|s| s.id == *id),
            StudentRef::Name(name) => self.students.iter().find(|s| &s.name == name),
        };
        found.ok_or_else(|| RecordsError::NotFound {
            student: student.to_string(),
        })
    }
}

impl Storage for MemoryStore {
    fn add_student(&mut self, name: &str, birth_year: Option<i32>) -> Result<StudentId> {
        validate_name(name, &*self)?;

        self.next_id += 1;
        let id = StudentId::new(self.next_id);
        self.students.push(Student {
            id,
            name: name.to_string(),
            birth_year,
        });
        debug!(student_id = %id, name, "registered student");
        Ok(id)
    }

    fn record_grade(&mut self, student: &StudentRef, subject: &str, score: i64) -> Result<()> {
        let (student_id, student_name) = {
            let found = self.resolve(student)?;
            (found.id, found.name.clone())
        };
        let score = validate_grade(subject, score)?;

        if self.policy == SubjectPolicy::UniquePerStudent
            && self
                .grades
                .iter()
                .any(|g| g.student_id == student_id && g.subject == subject)
        {
            return Err(RecordsError::DuplicateSubject {
                student: student_name,
                subject: subject.to_string(),
            });
        }

        self.grades.push(GradeEntry {
            student_id,
            subject: subject.to_string(),
            score,
        });
        debug!(student = %student_name, subject, score, "recorded grade");
        Ok(())
    }

    fn list_students(&self) -> Result<Vec<Student>> {
        Ok(self.students.clone())
    }

    fn list_grades(&self, student_id: StudentId) -> Result<Vec<GradeEntry>> {
        self.resolve(&StudentRef::Id(student_id))?;
        Ok(self
            .grades
            .iter()
            .filter(|g| g.student_id == student_id)
            .cloned()
            .collect())
    }

    fn subject_policy(&self) -> SubjectPolicy {
        self.policy
    }

    fn load_roster(
        &mut self,
        students: &[StudentSeed],
        grades: &[GradeSeed],
    ) -> Result<LoadSummary> {
        // Work on a copy so a failure part way through leaves `self` untouched.
        let mut staged = self.clone();
        let mut summary = LoadSummary::default();

        for (name, birth_year) in students {
            staged.add_student(name, *birth_year)?;
            summary.students_added += 1;
        }

        for (name, subject, score) in grades {
            if staged.find_student(name)?.is_none() {
                warn!(student = %name, subject = %subject, "skipping grade for unknown student");
                summary.skipped_grades.push(name.clone());
                continue;
            }
            staged.record_grade(&StudentRef::Name(name.clone()), subject, *score)?;
            summary.grades_added += 1;
        }

        *self = staged;
        Ok(summary)
    }

    fn replace_roster(
        &mut self,
        students: &[StudentSeed],
        grades: &[GradeSeed],
    ) -> Result<LoadSummary> {
        let mut staged = Self::with_policy(self.policy);
        let summary = staged.load_roster(students, grades)?;
        *self = staged;
        Ok(summary)
    }

    fn clear_all(&mut self) -> Result<()> {
        *self = Self::with_policy(self.policy);
        Ok(())
    }

    fn find_student(&self, name: &str) -> Result<Option<Student>> {
        Ok(self.students.iter().find(|s| s.name == name).cloned())
    }
}
