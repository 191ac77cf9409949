use serde::Serialize;
use std::fmt;

/// Courses that satisfy the language requirement. At most one counts.
pub const LANGUAGE_COURSES: [&str; 4] = [
    "English 30-1",
    "English 30-2",
    "French 30-1",
    "French 30-2",
];

/// Courses that satisfy the social studies requirement. At most one counts.
pub const SOCIAL_STUDIES_COURSES: [&str; 2] = ["Social Studies 30-1", "Social Studies 30-2"];

/// Courses that may fill the three remaining slots.
pub const ELECTIVE_COURSES: [&str; 15] = [
    "Biology 30",
    "Chemistry 30",
    "Physics 30",
    "Science 30",
    "Mathematics 30-1",
    "Mathematics 30-2",
    "Mathematics 31",
    "Aboriginal Studies 30",
    "Language and Culture 30",
    "Art 30",
    "Drama 30",
    "Music 30",
    "Dance 30",
    "Physical Education 30",
    "Career and Life Management",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseGroup {
    Language,
    SocialStudies,
    Elective,
}

impl CourseGroup {
    pub fn courses(&self) -> &'static [&'static str] {
        match self {
            CourseGroup::Language => &LANGUAGE_COURSES,
            CourseGroup::SocialStudies => &SOCIAL_STUDIES_COURSES,
            CourseGroup::Elective => &ELECTIVE_COURSES,
        }
    }

    pub fn all() -> [CourseGroup; 3] {
        [
            CourseGroup::Language,
            CourseGroup::SocialStudies,
            CourseGroup::Elective,
        ]
    }
}

impl fmt::Display for CourseGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseGroup::Language => write!(f, "Language (English/French)"),
            CourseGroup::SocialStudies => write!(f, "Social Studies"),
            CourseGroup::Elective => write!(f, "Electives"),
        }
    }
}

/// Classify a course name. Matching is exact; anything else is outside the catalog.
pub fn course_group(course: &str) -> Option<CourseGroup> {
    CourseGroup::all()
        .into_iter()
        .find(|group| group.courses().iter().any(|name| *name == course))
}

pub fn is_catalog_course(course: &str) -> bool {
    course_group(course).is_some()
}

/// Every catalog course paired with its group, in catalog order.
pub fn catalog() -> Vec<(&'static str, CourseGroup)> {
    CourseGroup::all()
        .into_iter()
        .flat_map(|group| group.courses().iter().map(move |course| (*course, group)))
        .collect()
}
