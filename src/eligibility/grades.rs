use serde::{Deserialize, Serialize};

use crate::error::{Result, ScholarshipError};

pub type Grade = u32;

/// Highest possible grade.
pub const MAX_GRADE: Grade = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseGrade {
    pub course: String,
    pub grade: Option<Grade>,
}

impl CourseGrade {
    pub fn new(course: impl Into<String>, grade: Option<Grade>) -> Self {
        Self {
            course: course.into(),
            grade,
        }
    }

    /// Parse a `COURSE=GRADE` pair. An empty or `-` grade means the grade is unknown.
    pub fn parse(entry: &str) -> Result<Self> {
        let (course, grade) = entry
            .rsplit_once('=')
            .ok_or_else(|| ScholarshipError::InvalidGrade(format!("expected COURSE=GRADE, got '{}'", entry)))?;

        let course = course.trim();
        if course.is_empty() {
            return Err(ScholarshipError::InvalidGrade(format!(
                "missing course name in '{}'",
                entry
            )));
        }

        let grade = match grade.trim() {
            "" | "-" => None,
            value => {
                let grade = value.parse::<Grade>().map_err(|_| {
                    ScholarshipError::InvalidGrade(format!("'{}' is not a whole-number grade", value))
                })?;
                if grade > MAX_GRADE {
                    return Err(ScholarshipError::InvalidGrade(format!(
                        "{} is above the maximum grade of {}",
                        grade, MAX_GRADE
                    )));
                }
                Some(grade)
            }
        };

        Ok(Self::new(course, grade))
    }
}

/// Course to grade mapping that remembers insertion order.
///
/// Order matters only for tie-breaking: among equal grades the earlier
/// course is preferred.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseGrades {
    entries: Vec<CourseGrade>,
}

impl CourseGrades {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a course's grade. An existing course keeps its position.
    pub fn insert(&mut self, course: impl Into<String>, grade: Option<Grade>) {
        let course = course.into();
        match self.entries.iter_mut().find(|entry| entry.course == course) {
            Some(entry) => entry.grade = grade,
            None => self.entries.push(CourseGrade { course, grade }),
        }
    }

    pub fn with(mut self, course: impl Into<String>, grade: Grade) -> Self {
        self.insert(course, Some(grade));
        self
    }

    pub fn get(&self, course: &str) -> Option<Grade> {
        self.entries
            .iter()
            .find(|entry| entry.course == course)
            .and_then(|entry| entry.grade)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CourseGrade> {
        self.entries.iter()
    }

    /// Entries that carry a grade, in insertion order.
    pub fn known(&self) -> impl Iterator<Item = (&str, Grade)> {
        self.entries
            .iter()
            .filter_map(|entry| entry.grade.map(|grade| (entry.course.as_str(), grade)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Option<Grade>)> for CourseGrades {
    fn from_iter<I: IntoIterator<Item = (S, Option<Grade>)>>(iter: I) -> Self {
        let mut grades = CourseGrades::new();
        for (course, grade) in iter {
            grades.insert(course, grade);
        }
        grades
    }
}

impl<S: Into<String>> FromIterator<(S, Grade)> for CourseGrades {
    fn from_iter<I: IntoIterator<Item = (S, Grade)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(course, grade)| (course, Some(grade)))
            .collect()
    }
}

impl FromIterator<CourseGrade> for CourseGrades {
    fn from_iter<I: IntoIterator<Item = CourseGrade>>(iter: I) -> Self {
        iter.into_iter()
            .map(|entry| (entry.course, entry.grade))
            .collect()
    }
}
