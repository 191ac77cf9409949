pub mod app;
pub mod components;
pub mod event;
pub mod theme;
pub mod ui;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, Stdout},
    time::Duration,
};
use tracing::info;

use rutherford_scholarship::{config::Config, error::Result};

use app::App;
use event::{Event, EventHandler};

const TICK_RATE: Duration = Duration::from_millis(250);

pub async fn run_tui(config: Config) -> Result<()> {
    // Open the store before touching the terminal so errors print normally.
    let mut app = App::new(config)?;
    info!("Starting dashboard");

    let mut terminal = setup_terminal()?;

    let result = run_loop(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    restore_on_error(enter_alternate_screen(), restore_terminal)
}

fn enter_alternate_screen() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Best effort: the setup error is the one worth reporting.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

fn restore_on_error<T>(result: io::Result<T>, restore: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        restore();
    }
    result
}

async fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let mut events = EventHandler::new(TICK_RATE);

    while !app.should_quit {
        terminal.draw(|frame| ui::render_ui(frame, app))?;

        match events.next().await {
            Some(Event::Key(key)) => app.handle_key(key),
            Some(Event::Tick) | Some(Event::Resize) => {}
            None => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn failed_setup_restores_the_terminal() {
        let restored = Cell::new(false);
        let result: io::Result<()> = restore_on_error(Err(io::Error::new(io::ErrorKind::Other, "no tty")), || {
            restored.set(true)
        });
        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn successful_setup_leaves_the_terminal_alone() {
        let restored = Cell::new(false);
        let result = restore_on_error(Ok(7), || restored.set(true));
        assert_eq!(result.unwrap(), 7);
        assert!(!restored.get());
    }
}
