use serde::Serialize;
use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};
use tracing::info;

use crate::{
    error::{Result, ScholarshipError},
    report::{formatter::VerdictFormatter, Report, RowOutcome},
};

pub const EXPORT_HEADERS: [&str; 3] = ["Student Name", "Grade Level", "Scholarship Result"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ScholarshipError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(ScholarshipError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// `<dir>/<stem>.<ext>`. A stem that already ends in the extension is kept as is.
pub fn export_path(dir: &Path, stem: &str, format: ExportFormat) -> PathBuf {
    let stem = stem.trim();
    let suffix = format!(".{}", format.extension());
    if stem.to_lowercase().ends_with(&suffix) {
        dir.join(stem)
    } else {
        dir.join(format!("{}{}", stem, suffix))
    }
}

#[derive(Serialize)]
struct ExportRecord<'a> {
    student_name: &'a str,
    grade_level: Option<&'a str>,
    scholarship_result: String,
    #[serde(flatten)]
    outcome: &'a RowOutcome,
}

pub fn render_csv(report: &Report, formatter: &VerdictFormatter) -> String {
    let mut csv = EXPORT_HEADERS.join(",");
    csv.push('\n');

    for row in &report.rows {
        let grade_level = row.grade_level.as_deref().unwrap_or("-");
        csv.push_str(&format!(
            "{},{},{}\n",
            escape_csv(&row.student_name),
            escape_csv(grade_level),
            escape_csv(&row.result_text(formatter))
        ));
    }

    csv
}

pub fn render_json(report: &Report, formatter: &VerdictFormatter) -> Result<String> {
    let records: Vec<_> = report
        .rows
        .iter()
        .map(|row| ExportRecord {
            student_name: &row.student_name,
            grade_level: row.grade_level.as_deref(),
            scholarship_result: row.result_text(formatter),
            outcome: &row.outcome,
        })
        .collect();

    Ok(serde_json::to_string_pretty(&records)?)
}

/// Write the report to `path`. Exports never carry emoji.
pub fn export_report(
    report: &Report,
    formatter: &VerdictFormatter,
    path: &Path,
    format: ExportFormat,
) -> Result<()> {
    let formatter = formatter.plain();
    let contents = match format {
        ExportFormat::Csv => render_csv(report, &formatter),
        ExportFormat::Json => render_json(report, &formatter)?,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)?;

    info!("Exported {} rows to {}", report.rows.len(), path.display());
    Ok(())
}

fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        report::{ReportRow, StudentFilter},
        storage::StudentRecord,
    };

    fn report() -> Report {
        let alice = StudentRecord::new("Alice", "Grade 10")
            .with_grade("English 30-1", Some(90))
            .with_grade("Social Studies 30-1", Some(85))
            .with_grade("Biology 30", Some(88))
            .with_grade("Mathematics 30-1", Some(91))
            .with_grade("Chemistry 30", Some(87));
        Report {
            filter: StudentFilter::All,
            rows: vec![
                ReportRow::evaluated(&alice),
                ReportRow::not_found("Smith, Jo"),
            ],
        }
    }

    #[test]
    fn parses_formats() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!(" json ".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("excel".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn builds_paths_with_extension() {
        let dir = Path::new("out");
        assert_eq!(
            export_path(dir, "results", ExportFormat::Csv),
            Path::new("out/results.csv")
        );
        assert_eq!(
            export_path(dir, "results.JSON", ExportFormat::Json),
            Path::new("out/results.JSON")
        );
    }

    #[test]
    fn csv_quotes_fields_with_commas() {
        let csv = render_csv(&report(), &VerdictFormatter::default().plain());
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "Student Name,Grade Level,Scholarship Result");
        assert_eq!(lines[1], "Alice,Grade 10,Eligible for $2500 - Average: 88.20");
        assert_eq!(lines[2], "\"Smith, Jo\",-,Not found in database");
    }

    #[test]
    fn escapes_quotes() {
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv("plain"), "plain");
    }

    #[test]
    fn writes_json_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_path(dir.path(), "results", ExportFormat::Json);
        export_report(&report(), &VerdictFormatter::default(), &path, ExportFormat::Json).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written[0]["scholarship_result"], "Eligible for $2500 - Average: 88.20");
        assert_eq!(written[0]["verdict"]["tier"], "top");
        assert_eq!(written[1]["result"], "not_found");
    }

    #[test]
    fn writes_csv_export_into_new_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_path(&dir.path().join("exports"), "grade10", ExportFormat::Csv);
        export_report(&report(), &VerdictFormatter::default(), &path, ExportFormat::Csv).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(!text.contains('✅'));
        assert_eq!(text.lines().count(), 3);
    }
}
