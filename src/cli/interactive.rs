use std::{
    io::{BufRead, Write},
    path::PathBuf,
};
use tracing::warn;

use rutherford_scholarship::{
    error::Result,
    report::{build_report, export_path, export_report, ExportFormat, Report, StudentFilter, VerdictFormatter},
    storage::StudentStore,
    utils::prompt_line,
};

use crate::cli::output::{report_table, summary_line};

/// Numbered-menu checker. Each listing builds its own filter from the answers given.
pub struct InteractiveSession<'a, S: StudentStore, R: BufRead, W: Write> {
    store: &'a S,
    formatter: VerdictFormatter,
    export_dir: PathBuf,
    input: R,
    output: W,
}

impl<'a, S: StudentStore, R: BufRead, W: Write> InteractiveSession<'a, S, R, W> {
    pub fn new(store: &'a S, formatter: VerdictFormatter, export_dir: PathBuf, input: R, output: W) -> Self {
        Self {
            store,
            formatter,
            export_dir,
            input,
            output,
        }
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        Ok(prompt_line(&mut self.input, &mut self.output, prompt)?)
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "\n📘 RUTHERFORD SCHOLARSHIP CHECKER")?;
            writeln!(self.output, "1. Check all students or by name")?;
            writeln!(self.output, "2. Search students by Grade Level")?;
            writeln!(self.output, "3. Exit")?;

            let Some(mode) = self.ask("\nEnter 1, 2, or 3 to choose an option: ")? else {
                break;
            };

            match mode.to_lowercase().as_str() {
                "3" | "exit" => break,
                "1" => {
                    if !self.check_by_name()? {
                        break;
                    }
                }
                "2" => {
                    if !self.check_by_grade_level()? {
                        break;
                    }
                }
                _ => writeln!(self.output, "❌ Invalid option. Please choose 1, 2, or 3.")?,
            }
        }

        writeln!(self.output, "👋 Exiting Scholarship Checker.")?;
        Ok(())
    }

    /// Returns `false` when input ran out.
    fn check_by_name(&mut self) -> Result<bool> {
        let names = self.store.student_names()?;
        writeln!(self.output, "\n📋 Available Students:")?;
        writeln!(self.output, "{}", names.join(", "))?;

        let Some(answer) = self.ask("\nType 'all' to check everyone, or enter specific names (comma-separated): ")? else {
            return Ok(false);
        };

        let filter = StudentFilter::from_name_list(&answer);
        let report = build_report(self.store, &filter)?;
        self.show(&report, "🎓 Scholarship Eligibility Summary:")?;
        self.offer_export(&report)
    }

    fn check_by_grade_level(&mut self) -> Result<bool> {
        let Some(level) = self.ask("Enter grade level (e.g., Grade 9, Grade 10): ")? else {
            return Ok(false);
        };

        let filter = StudentFilter::grade_level(&level);
        let report = build_report(self.store, &filter)?;
        if report.is_empty() {
            writeln!(self.output, "\n❌ No students found in {}.", level)?;
            return Ok(true);
        }

        self.show(&report, &format!("🎓 Scholarship Results for {}:", level))?;
        self.offer_export(&report)
    }

    fn show(&mut self, report: &Report, title: &str) -> Result<()> {
        writeln!(self.output, "\n{}", title)?;
        for line in report_table(report, &self.formatter, false) {
            writeln!(self.output, "{}", line)?;
        }
        writeln!(self.output, "{}", summary_line(&report.summary()))?;
        Ok(())
    }

    fn offer_export(&mut self, report: &Report) -> Result<bool> {
        let Some(answer) = self.ask("\nWould you like to export the results? (yes/no): ")? else {
            return Ok(false);
        };
        if !matches!(answer.to_lowercase().as_str(), "yes" | "y") {
            return Ok(true);
        }

        let Some(stem) = self.ask("Enter filename (without extension): ")? else {
            return Ok(false);
        };
        let Some(kind) = self.ask("Type 'csv' or 'json': ")? else {
            return Ok(false);
        };

        if stem.is_empty() {
            writeln!(self.output, "❌ No filename given. No file saved.")?;
            return Ok(true);
        }

        let format = match kind.parse::<ExportFormat>() {
            Ok(format) => format,
            Err(e) => {
                warn!("{}", e);
                writeln!(self.output, "❌ Invalid export type. No file saved.")?;
                return Ok(true);
            }
        };

        let path = export_path(&self.export_dir, &stem, format);
        export_report(report, &self.formatter, &path, format)?;
        writeln!(self.output, "✅ Results exported to {}", path.display())?;
        Ok(true)
    }
}
