use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::{
    app::{App, InputMode},
    components,
};

pub fn render_ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Filters
            Constraint::Length(4), // Stats
            Constraint::Min(8),    // Results
            Constraint::Length(3), // Selection details
            Constraint::Length(7), // Logs
            Constraint::Length(3), // Status bar
        ])
        .split(frame.size());

    components::header::render(frame, chunks[0], app);
    components::filter_bar::render(frame, chunks[1], app);
    components::stats::render(frame, chunks[2], app);
    components::results_table::render(frame, chunks[3], app);
    components::results_table::render_details(frame, chunks[4], app);
    components::logs::render(frame, chunks[5], app);
    render_status_bar(frame, chunks[6], app);

    if app.show_help {
        components::help::render(frame, centered(chunks[3], 60, 10));
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let (mode, mode_color) = match app.input_mode {
        InputMode::Normal => ("NORMAL", Color::Cyan),
        InputMode::Editing => ("EDITING", Color::Yellow),
    };

    let text = Line::from(vec![
        Span::styled(
            format!(" {} ", mode),
            Style::default()
                .fg(Color::Black)
                .bg(mode_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(app.status_message.as_str(), Style::default().fg(Color::Gray)),
        Span::raw(" | "),
        Span::styled("?: Help", Style::default().fg(Color::Yellow)),
        Span::raw(" | "),
        Span::styled("q: Quit", Style::default().fg(Color::Red)),
    ]);

    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}

/// A `width` x `height` box centred in `area`, clipped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centred_box_fits_inside_area() {
        let area = Rect::new(0, 5, 40, 6);
        let inner = centered(area, 60, 10);
        assert_eq!(inner, Rect::new(0, 5, 40, 6));

        let inner = centered(Rect::new(0, 0, 100, 20), 60, 10);
        assert_eq!(inner, Rect::new(20, 5, 60, 10));
    }
}
