use rusqlite::{params, Connection};
use std::collections::HashMap;
use tracing::debug;

use crate::{
    eligibility::{CourseGrades, Grade},
    error::Result,
    storage::{models::StudentRecord, StudentStore},
};

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "PRAGMA foreign_keys = ON;

            CREATE TABLE IF NOT EXISTS students (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                grade_level TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS course_grades (
                student_id INTEGER NOT NULL,
                course TEXT NOT NULL,
                grade INTEGER,
                position INTEGER NOT NULL,
                PRIMARY KEY (student_id, course),
                FOREIGN KEY (student_id) REFERENCES students(id) ON DELETE CASCADE
            );

            CREATE INDEX IF NOT EXISTS idx_students_grade_level ON students(grade_level);",
        )?;
        Ok(())
    }

    /// Remove every student and grade.
    pub fn reset(&self) -> Result<()> {
        self.conn.execute_batch(
            "DELETE FROM course_grades;
             DELETE FROM students;",
        )?;
        debug!("Student store cleared");
        Ok(())
    }

    pub fn insert_student(&mut self, student: &StudentRecord) -> Result<i64> {
        let tx = self.conn.transaction()?;

        tx.execute(
            "INSERT INTO students (name, grade_level) VALUES (?1, ?2)",
            params![student.name, student.grade_level],
        )?;
        let id = tx.last_insert_rowid();

        {
            let mut stmt = tx.prepare(
                "INSERT INTO course_grades (student_id, course, grade, position)
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for (position, entry) in student.grades.iter().enumerate() {
                stmt.execute(params![id, entry.course, entry.grade, position as i64])?;
            }
        }

        tx.commit()?;
        debug!("Stored student {} (id {})", student.name, id);
        Ok(id)
    }

    pub fn count(&self) -> Result<usize> {
        let total: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM students", [], |row| row.get(0))?;
        Ok(total as usize)
    }

    fn query_students(&self, sql: &str, params: &[&dyn rusqlite::ToSql]) -> Result<Vec<StudentRecord>> {
        let mut stmt = self.conn.prepare(sql)?;

        let mut students = stmt
            .query_map(params, |row| {
                Ok(StudentRecord {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    grade_level: row.get(2)?,
                    grades: CourseGrades::new(),
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut grades = self.load_all_grades()?;
        for student in &mut students {
            if let Some(student_grades) = grades.remove(&student.id) {
                student.grades = student_grades;
            }
        }

        Ok(students)
    }

    fn load_grades(&self, student_id: i64) -> Result<CourseGrades> {
        let mut stmt = self.conn.prepare(
            "SELECT course, grade FROM course_grades
             WHERE student_id = ?1
             ORDER BY position",
        )?;

        let rows = stmt
            .query_map([student_id], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, Option<Grade>>(1)?))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(rows.into_iter().collect())
    }

    fn load_all_grades(&self) -> Result<HashMap<i64, CourseGrades>> {
        let mut stmt = self.conn.prepare(
            "SELECT student_id, course, grade FROM course_grades
             ORDER BY student_id, position",
        )?;

        let mut grades: HashMap<i64, CourseGrades> = HashMap::new();
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, Option<Grade>>(2)?,
            ))
        })?;

        for row in rows {
            let (student_id, course, grade) = row?;
            grades.entry(student_id).or_default().insert(course, grade);
        }

        Ok(grades)
    }
}

impl StudentStore for Database {
    fn student_names(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT name FROM students ORDER BY name")?;
        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        Ok(names)
    }

    fn grade_levels(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT grade_level FROM students ORDER BY grade_level")?;
        let levels = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        Ok(levels)
    }

    fn all_students(&self) -> Result<Vec<StudentRecord>> {
        self.query_students(
            "SELECT id, name, grade_level FROM students ORDER BY name, id",
            &[],
        )
    }

    fn find_by_name(&self, name: &str) -> Result<Vec<StudentRecord>> {
        self.query_students(
            "SELECT id, name, grade_level FROM students
             WHERE LOWER(name) = LOWER(?1)
             ORDER BY id",
            &[&name],
        )
    }

    fn find_by_grade_level(&self, grade_level: &str) -> Result<Vec<StudentRecord>> {
        self.query_students(
            "SELECT id, name, grade_level FROM students
             WHERE grade_level = ?1
             ORDER BY id",
            &[&grade_level],
        )
    }
}
