use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::tui::app::{App, LogLevel};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .logs
        .iter()
        .rev()
        .take(area.height.saturating_sub(2) as usize)
        .map(|log| {
            let (icon, color) = match log.level {
                LogLevel::Info => ("ℹ", Color::Blue),
                LogLevel::Success => ("✓", app.theme.success),
                LogLevel::Warning => ("⚠", app.theme.warning),
                LogLevel::Error => ("✗", app.theme.error),
            };

            let content = vec![
                Span::styled(format!("{} ", icon), Style::default().fg(color)),
                Span::styled(
                    log.timestamp.format("[%H:%M:%S]").to_string(),
                    Style::default().fg(app.theme.muted),
                ),
                Span::raw(" "),
                Span::raw(log.message.as_str()),
            ];

            ListItem::new(Line::from(content))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Logs")
            .border_style(Style::default().fg(app.theme.primary)),
    );

    frame.render_widget(list, area);
}
