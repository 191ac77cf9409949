use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

pub const KEYBINDINGS: [(&str, &str); 8] = [
    ("/", "Edit name filter (Enter / Esc to finish)"),
    ("g", "Cycle grade level"),
    ("↑ / ↓", "Select student"),
    ("e", "Export current view to CSV"),
    ("r", "Reload from database"),
    ("h / ?", "Toggle help"),
    ("q / Esc", "Quit"),
    ("Ctrl+C", "Quit"),
];

pub fn render(frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = KEYBINDINGS
        .iter()
        .map(|(key, desc)| {
            let content = vec![
                Span::styled(
                    format!("{:10}", key),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" - "),
                Span::styled(*desc, Style::default().fg(Color::White)),
            ];
            ListItem::new(Line::from(content))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Keybindings")
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(list, area);
}
