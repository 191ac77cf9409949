use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use rutherford_scholarship::{eligibility::AwardTier, report::VerdictFormatter};

use crate::tui::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let summary = &app.summary;
    let top = app.formatter.award_amount(AwardTier::Top).unwrap_or(0) as u64;
    let reduced = app.formatter.award_amount(AwardTier::Reduced).unwrap_or(0) as u64;
    let committed = summary.top as u64 * top + summary.reduced as u64 * reduced;

    render_stat(
        frame,
        chunks[0],
        "Top Award",
        summary.top.to_string(),
        app.theme.success,
    );

    render_stat(
        frame,
        chunks[1],
        "Reduced Award",
        summary.reduced.to_string(),
        app.theme.warning,
    );

    render_stat(
        frame,
        chunks[2],
        "Ineligible",
        summary.ineligible.to_string(),
        app.theme.error,
    );

    render_stat(
        frame,
        chunks[3],
        "Total Awarded",
        format!("${}", committed),
        app.theme.primary,
    );
}

fn render_stat(frame: &mut Frame, area: Rect, label: &str, value: String, color: Color) {
    let text = vec![
        Line::from(Span::styled(label, Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
