use colored::Colorize;

use rutherford_scholarship::{
    report::{Report, Summary, VerdictFormatter},
    utils,
};

const NAME_WIDTH: usize = 20;
const LEVEL_WIDTH: usize = 11;
const RESULT_WIDTH: usize = 62;
const WIDTHS: [usize; 3] = [NAME_WIDTH, LEVEL_WIDTH, RESULT_WIDTH];

/// Grid lines for a report: border, header, border, one line per row, border.
pub fn report_table(report: &Report, formatter: &VerdictFormatter, color: bool) -> Vec<String> {
    let border = format!(
        "+{}+",
        WIDTHS
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+")
    );

    let mut lines = vec![
        border.clone(),
        utils::table_row(&["Student Name", "Grade Level", "Scholarship Result"], &WIDTHS),
        border.replace('-', "="),
    ];

    for row in &report.rows {
        let result = row.result_text(formatter);
        let line = utils::table_row(
            &[
                &row.student_name,
                row.grade_level.as_deref().unwrap_or("-"),
                &result,
            ],
            &WIDTHS,
        );
        if color {
            let tier = row.verdict().map(|v| v.tier());
            lines.push(utils::colorize_tier(&line, tier).to_string());
        } else {
            lines.push(line);
        }
    }

    lines.push(border);
    lines
}

pub fn summary_line(summary: &Summary) -> String {
    let mut line = format!(
        "Top award: {}  Reduced award: {}  Ineligible: {}",
        summary.top, summary.reduced, summary.ineligible
    );
    if summary.not_found > 0 {
        line.push_str(&format!("  Not found: {}", summary.not_found));
    }
    line
}

pub fn print_report(report: &Report, formatter: &VerdictFormatter, title: &str) {
    println!("\n{}", title.cyan().bold());
    for line in report_table(report, formatter, true) {
        println!("{}", line);
    }
    println!("{}", summary_line(&report.summary()));
}
