use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use rutherford_scholarship::report::VerdictFormatter;

use crate::tui::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let awards = &app.config.awards;
    let title = vec![
        Span::styled("🎓 ", Style::default().fg(app.theme.warning)),
        Span::styled(
            "Rutherford Scholarship Checker",
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(
            format!(
                "Top {} / Reduced {}",
                VerdictFormatter::currency(awards.top_amount),
                VerdictFormatter::currency(awards.reduced_amount)
            ),
            Style::default().fg(app.theme.success),
        ),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.primary));

    let paragraph = Paragraph::new(Line::from(title))
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
