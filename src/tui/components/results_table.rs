use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::tui::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let header_cells = ["Student Name", "Grade Level", "Scholarship Result"]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(app.theme.warning)));

    let header = Row::new(header_cells)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .height(1)
        .bottom_margin(1);

    let rows = app.report.rows.iter().map(|row| {
        let color = app.theme.tier_color(row.verdict().map(|v| v.tier()));
        let cells = vec![
            Cell::from(row.student_name.clone()),
            Cell::from(row.grade_level.clone().unwrap_or_else(|| "-".to_string())),
            Cell::from(row.result_text(&app.formatter)).style(Style::default().fg(color)),
        ];
        Row::new(cells).height(1)
    });

    let widths = [
        Constraint::Length(20),
        Constraint::Length(12),
        Constraint::Min(30),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Students ({})", app.report.rows.len()))
                .border_style(Style::default().fg(app.theme.primary)),
        )
        .highlight_style(
            Style::default()
                .bg(app.theme.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    let mut state = TableState::default();
    if !app.report.rows.is_empty() {
        state.select(Some(app.selected_index));
    }

    frame.render_stateful_widget(table, area, &mut state);
}

/// Counted courses of the selected student, or why nothing counted.
pub fn render_details(frame: &mut Frame, area: Rect, app: &App) {
    let text = match app.selected_row() {
        Some(row) => match row.verdict() {
            Some(verdict) if !verdict.selected().is_empty() => {
                format!("{}: {}", row.student_name, app.formatter.selected_courses(verdict))
            }
            Some(verdict) => format!("{}: {}", row.student_name, app.formatter.plain().summary_line(verdict)),
            None => format!("{}: {}", row.student_name, app.formatter.plain().not_found_line()),
        },
        None => "No students match the current filter".to_string(),
    };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(app.theme.foreground))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Counted Courses")
                .border_style(Style::default().fg(app.theme.muted)),
        );

    frame.render_widget(paragraph, area);
}
