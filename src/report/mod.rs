pub mod export;
pub mod filter;
pub mod formatter;

pub use export::{export_path, export_report, ExportFormat};
pub use filter::StudentFilter;
pub use formatter::VerdictFormatter;

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::{
    eligibility::{AwardTier, Verdict},
    error::Result,
    storage::{StudentRecord, StudentStore},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum RowOutcome {
    Evaluated { verdict: Verdict },
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub student_name: String,
    pub grade_level: Option<String>,
    #[serde(flatten)]
    pub outcome: RowOutcome,
}

impl ReportRow {
    pub fn evaluated(student: &StudentRecord) -> Self {
        Self {
            student_name: student.name.clone(),
            grade_level: Some(student.grade_level.clone()),
            outcome: RowOutcome::Evaluated {
                verdict: student.verdict(),
            },
        }
    }

    pub fn not_found(name: &str) -> Self {
        Self {
            student_name: name.to_string(),
            grade_level: None,
            outcome: RowOutcome::NotFound,
        }
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        match &self.outcome {
            RowOutcome::Evaluated { verdict } => Some(verdict),
            RowOutcome::NotFound => None,
        }
    }

    /// Text for the result column.
    pub fn result_text(&self, formatter: &VerdictFormatter) -> String {
        match &self.outcome {
            RowOutcome::Evaluated { verdict } => formatter.summary_line(verdict),
            RowOutcome::NotFound => formatter.not_found_line(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub top: usize,
    pub reduced: usize,
    pub ineligible: usize,
    pub not_found: usize,
}

impl Summary {
    pub fn record(&mut self, row: &ReportRow) {
        match row.verdict().map(Verdict::tier) {
            Some(AwardTier::Top) => self.top += 1,
            Some(AwardTier::Reduced) => self.reduced += 1,
            Some(AwardTier::None) => self.ineligible += 1,
            None => self.not_found += 1,
        }
    }

    pub fn evaluated(&self) -> usize {
        self.top + self.reduced + self.ineligible
    }

    pub fn eligible(&self) -> usize {
        self.top + self.reduced
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub filter: StudentFilter,
    pub rows: Vec<ReportRow>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn summary(&self) -> Summary {
        let mut summary = Summary::default();
        for row in &self.rows {
            summary.record(row);
        }
        summary
    }

    /// Summaries keyed by grade level. Not-found rows are left out.
    pub fn summary_by_grade_level(&self) -> BTreeMap<String, Summary> {
        let mut levels: BTreeMap<String, Summary> = BTreeMap::new();
        for row in &self.rows {
            if let Some(level) = &row.grade_level {
                levels.entry(level.clone()).or_default().record(row);
            }
        }
        levels
    }
}

/// Evaluate every student selected by `filter`.
///
/// Named lookups keep the requested order and add a not-found row for each
/// name that matches nobody.
pub fn build_report<S: StudentStore + ?Sized>(store: &S, filter: &StudentFilter) -> Result<Report> {
    let rows = match filter {
        StudentFilter::All => store
            .all_students()?
            .iter()
            .map(ReportRow::evaluated)
            .collect(),
        StudentFilter::GradeLevel(level) => store
            .find_by_grade_level(level)?
            .iter()
            .map(ReportRow::evaluated)
            .collect(),
        StudentFilter::Names(names) => {
            let mut rows = Vec::new();
            for name in names.iter().map(|n| n.trim()).filter(|n| !n.is_empty()) {
                let matches = store.find_by_name(name)?;
                if matches.is_empty() {
                    debug!("No student named {}", name);
                    rows.push(ReportRow::not_found(name));
                } else {
                    rows.extend(matches.iter().map(ReportRow::evaluated));
                }
            }
            rows
        }
    };

    Ok(Report {
        filter: filter.clone(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MockStudentStore;
    use mockall::predicate::eq;

    fn alice() -> StudentRecord {
        StudentRecord::new("Alice", "Grade 10")
            .with_grade("English 30-1", Some(90))
            .with_grade("Social Studies 30-1", Some(85))
            .with_grade("Biology 30", Some(88))
            .with_grade("Mathematics 30-1", Some(91))
            .with_grade("Chemistry 30", Some(87))
    }

    fn nina() -> StudentRecord {
        StudentRecord::new("Nina", "Grade 10")
            .with_grade("English 30-1", Some(90))
            .with_grade("Social Studies 30-1", Some(90))
    }

    #[test]
    fn named_report_keeps_order_and_flags_missing() {
        let mut store = MockStudentStore::new();
        store
            .expect_find_by_name()
            .with(eq("nina"))
            .returning(|_| Ok(vec![nina()]));
        store
            .expect_find_by_name()
            .with(eq("Zed"))
            .returning(|_| Ok(Vec::new()));
        store
            .expect_find_by_name()
            .with(eq("alice"))
            .returning(|_| Ok(vec![alice()]));

        let filter = StudentFilter::from_name_list("nina, Zed, alice");
        let report = build_report(&store, &filter).unwrap();

        let names: Vec<_> = report.rows.iter().map(|r| r.student_name.as_str()).collect();
        assert_eq!(names, vec!["Nina", "Zed", "Alice"]);
        assert_eq!(report.rows[1].outcome, RowOutcome::NotFound);
        assert_eq!(
            report.summary(),
            Summary {
                top: 1,
                reduced: 0,
                ineligible: 1,
                not_found: 1
            }
        );
    }

    #[test]
    fn grade_level_report_queries_level_only() {
        let mut store = MockStudentStore::new();
        store
            .expect_find_by_grade_level()
            .with(eq("Grade 10"))
            .times(1)
            .returning(|_| Ok(vec![alice(), nina()]));
        store.expect_all_students().never();

        let report = build_report(&store, &StudentFilter::grade_level(" Grade 10 ")).unwrap();
        assert_eq!(report.rows.len(), 2);

        let by_level = report.summary_by_grade_level();
        assert_eq!(by_level["Grade 10"].eligible(), 1);
        assert_eq!(by_level["Grade 10"].evaluated(), 2);
    }

    #[test]
    fn result_text_uses_formatter() {
        let formatter = VerdictFormatter::default();
        let row = ReportRow::evaluated(&alice());
        assert_eq!(
            row.result_text(&formatter),
            "✅ Eligible for $2500 - Average: 88.20"
        );
        assert_eq!(
            ReportRow::not_found("Zed").result_text(&formatter),
            "❌ Not found in database"
        );
    }
}
