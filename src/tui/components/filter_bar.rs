use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::{App, InputMode};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let editing = app.input_mode == InputMode::Editing;
    let border_color = if editing { app.theme.warning } else { app.theme.muted };

    // Inner width excludes the two border cells.
    let width = chunks[0].width.saturating_sub(2) as usize;
    let input = &app.filter.name;
    let scroll = input.visual_scroll(width);

    let name = Paragraph::new(input.value())
        .style(Style::default().fg(app.theme.foreground))
        .scroll((0, scroll as u16))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Name (/)")
                .border_style(Style::default().fg(border_color)),
        );
    frame.render_widget(name, chunks[0]);

    if editing {
        let offset = input.visual_cursor().saturating_sub(scroll) as u16;
        frame.set_cursor(chunks[0].x + 1 + offset, chunks[0].y + 1);
    }

    let grade = Paragraph::new(Line::from(vec![
        Span::styled(
            app.filter.grade_label(),
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ({} levels)", app.grade_levels.len()),
            Style::default().fg(app.theme.muted),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Grade Level (g)")
            .border_style(Style::default().fg(app.theme.muted)),
    );
    frame.render_widget(grade, chunks[1]);
}
