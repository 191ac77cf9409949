use serde::Serialize;
use std::fmt;

/// Which students a report covers. Built per request and passed in explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum StudentFilter {
    All,
    Names(Vec<String>),
    GradeLevel(String),
}

impl StudentFilter {
    /// Parse a comma-separated name list. `all` (any case) selects everyone.
    pub fn from_name_list(input: &str) -> Self {
        let input = input.trim();
        if input.eq_ignore_ascii_case("all") {
            return StudentFilter::All;
        }
        StudentFilter::Names(
            input
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn grade_level(level: &str) -> Self {
        StudentFilter::GradeLevel(level.trim().to_string())
    }
}

impl fmt::Display for StudentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudentFilter::All => write!(f, "All students"),
            StudentFilter::Names(names) => write!(f, "Students: {}", names.join(", ")),
            StudentFilter::GradeLevel(level) => write!(f, "{}", level),
        }
    }
}
