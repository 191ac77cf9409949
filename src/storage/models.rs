use serde::{Deserialize, Serialize};

use crate::eligibility::{evaluate, CourseGrades, Grade, Verdict};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: i64,
    pub name: String,
    pub grade_level: String,
    pub grades: CourseGrades,
}

impl StudentRecord {
    pub fn new(name: impl Into<String>, grade_level: impl Into<String>) -> Self {
        Self {
            id: 0, // assigned on insert
            name: name.into(),
            grade_level: grade_level.into(),
            grades: CourseGrades::new(),
        }
    }

    pub fn with_grade(mut self, course: impl Into<String>, grade: Option<Grade>) -> Self {
        self.grades.insert(course, grade);
        self
    }

    pub fn verdict(&self) -> Verdict {
        evaluate(&self.grades)
    }
}
