//! `Storage` implementation for the SQLite database

use super::{models::*, schema::StudentDatabase, Storage};
use crate::{
    cli::types::ids::{StudentId, StudentRef},
    error::{RecordsError, Result},
    validation::{check_name, validate_grade},
};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::{debug, warn};

impl Storage for StudentDatabase {
    fn add_student(&mut self, name: &str, birth_year: Option<i32>) -> Result<StudentId> {
        let tx = self.conn.transaction()?;
        let id = insert_student(&tx, name, birth_year)?;
        tx.commit()?;
        debug!(student_id = %id, name, "registered student");
        Ok(id)
    }

    fn record_grade(&mut self, student: &StudentRef, subject: &str, score: i64) -> Result<()> {
        let tx = self.conn.transaction()?;
        insert_grade(&tx, student, subject, score)?;
        tx.commit()?;
        debug!(student = %student, subject, score, "recorded grade");
        Ok(())
    }

    fn list_students(&self) -> Result<Vec<Student>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, full_name, birth_year FROM students ORDER BY id")?;

        let rows = stmt.query_map([], row_to_student)?;

        let mut students = Vec::new();
        for row in rows {
            students.push(row?);
        }
        Ok(students)
    }

    fn list_grades(&self, student_id: StudentId) -> Result<Vec<GradeEntry>> {
        if lookup_student(&self.conn, &StudentRef::Id(student_id))?.is_none() {
            return Err(RecordsError::NotFound {
                student: StudentRef::Id(student_id).to_string(),
            });
        }

        let mut stmt = self.conn.prepare(
            "SELECT student_id, subject, grade
             FROM grades
             WHERE student_id = ?
             ORDER BY id",
        )?;

        let rows = stmt.query_map(params![student_id.as_i64()], |row| {
            Ok(GradeEntry {
                student_id: StudentId::new(row.get(0)?),
                subject: row.get(1)?,
                score: row.get(2)?,
            })
        })?;

        let mut grades = Vec::new();
        for row in rows {
            grades.push(row?);
        }
        Ok(grades)
    }

    fn subject_policy(&self) -> SubjectPolicy {
        SubjectPolicy::UniquePerStudent
    }

    fn load_roster(
        &mut self,
        students: &[StudentSeed],
        grades: &[GradeSeed],
    ) -> Result<LoadSummary> {
        let tx = self.conn.transaction()?;
        let summary = insert_roster(&tx, students, grades)?;
        tx.commit()?;
        Ok(summary)
    }

    fn replace_roster(
        &mut self,
        students: &[StudentSeed],
        grades: &[GradeSeed],
    ) -> Result<LoadSummary> {
        let tx = self.conn.transaction()?;
        delete_everything(&tx)?;
        let summary = insert_roster(&tx, students, grades)?;
        tx.commit()?;
        Ok(summary)
    }

    fn clear_all(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        delete_everything(&tx)?;
        tx.commit()?;
        Ok(())
    }

    fn find_student(&self, name: &str) -> Result<Option<Student>> {
        lookup_student(&self.conn, &StudentRef::Name(name.to_string()))
    }
}

impl StudentDatabase {
    /// Number of registered students
    pub fn student_count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM students", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn insert_student(conn: &Connection, name: &str, birth_year: Option<i32>) -> Result<StudentId> {
    check_name(name)?;
    if lookup_student(conn, &StudentRef::Name(name.to_string()))?.is_some() {
        return Err(RecordsError::DuplicateName {
            name: name.to_string(),
        });
    }

    conn.execute(
        "INSERT INTO students (full_name, birth_year) VALUES (?, ?)",
        params![name, birth_year],
    )?;
    Ok(StudentId::new(conn.last_insert_rowid()))
}

fn insert_grade(conn: &Connection, student: &StudentRef, subject: &str, score: i64) -> Result<()> {
    let found = lookup_student(conn, student)?.ok_or_else(|| RecordsError::NotFound {
        student: student.to_string(),
    })?;
    let score = validate_grade(subject, score)?;

    let exists: Option<i64> = conn
        .query_row(
            "SELECT id FROM grades WHERE student_id = ? AND subject = ?",
            params![found.id.as_i64(), subject],
            |row| row.get(0),
        )
        .optional()?;
    if exists.is_some() {
        return Err(RecordsError::DuplicateSubject {
            student: found.name,
            subject: subject.to_string(),
        });
    }

    conn.execute(
        "INSERT INTO grades (student_id, subject, grade) VALUES (?, ?, ?)",
        params![found.id.as_i64(), subject, score],
    )?;
    Ok(())
}

fn insert_roster(
    conn: &Connection,
    students: &[StudentSeed],
    grades: &[GradeSeed],
) -> Result<LoadSummary> {
    let mut summary = LoadSummary::default();

    for (name, birth_year) in students {
        insert_student(conn, name, *birth_year)?;
        summary.students_added += 1;
    }

    for (name, subject, score) in grades {
        let student = StudentRef::Name(name.clone());
        if lookup_student(conn, &student)?.is_none() {
            warn!(student = %name, subject = %subject, "skipping grade for unknown student");
            summary.skipped_grades.push(name.clone());
            continue;
        }
        insert_grade(conn, &student, subject, *score)?;
        summary.grades_added += 1;
    }

    Ok(summary)
}

fn delete_everything(conn: &Connection) -> Result<()> {
    // Grades first due to the foreign key
    conn.execute("DELETE FROM grades", [])?;
    conn.execute("DELETE FROM students", [])?;
    // Restart AUTOINCREMENT ids
    conn.execute(
        "DELETE FROM sqlite_sequence WHERE name IN ('students', 'grades')",
        [],
    )?;
    Ok(())
}

fn lookup_student(conn: &Connection, student: &StudentRef) -> Result<Option<Student>> {
    let found = match student {
        StudentRef::Id(id) => conn
            .query_row(
                "SELECT id, full_name, birth_year FROM students WHERE id = ?",
                params![id.as_i64()],
                row_to_student,
            )
            .optional()?,
        StudentRef::Name(name) => conn
            .query_row(
                "SELECT id, full_name, birth_year FROM students WHERE full_name = ?",
                params![name],
                row_to_student,
            )
            .optional()?,
    };
    Ok(found)
}

/// Helper to convert a database row to a Student
fn row_to_student(row: &Row) -> rusqlite::Result<Student> {
    Ok(Student {
        id: StudentId::new(row.get(0)?),
        name: row.get(1)?,
        birth_year: row.get(2)?,
    })
}
