pub mod db;
pub mod models;
pub mod seed;

pub use db::Database;
pub use models::StudentRecord;

use crate::error::Result;

/// Read access to the student roster used by the reporting layer.
#[cfg_attr(test, mockall::automock)]
pub trait StudentStore {
    /// Distinct student names, sorted.
    fn student_names(&self) -> Result<Vec<String>>;

    /// Distinct grade level labels, sorted.
    fn grade_levels(&self) -> Result<Vec<String>>;

    fn all_students(&self) -> Result<Vec<StudentRecord>>;

    /// Students whose name matches ignoring case.
    fn find_by_name(&self, name: &str) -> Result<Vec<StudentRecord>>;

    fn find_by_grade_level(&self, grade_level: &str) -> Result<Vec<StudentRecord>>;
}
