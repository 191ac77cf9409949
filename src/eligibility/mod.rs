pub mod catalog;
pub mod grades;
pub mod evaluator;
pub mod verdict;

pub use catalog::{catalog, course_group, is_catalog_course, CourseGroup};
pub use grades::{CourseGrade, CourseGrades, Grade, MAX_GRADE};
pub use evaluator::evaluate;
pub use verdict::{AwardTier, IneligibleReason, Scorecard, SelectedCourse, Verdict};
