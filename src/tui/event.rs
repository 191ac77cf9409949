use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::time::{Duration, Instant};
use tracing::warn;

pub enum Event {
    /// Terminal tick
    Tick,
    /// Key press
    Key(KeyEvent),
    /// Terminal resize
    Resize,
}

pub struct EventHandler {
    /// Event receiver
    receiver: tokio::sync::mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = tokio::sync::mpsc::channel(100);

        // crossterm polling blocks, so it gets its own thread
        tokio::task::spawn_blocking(move || {
            let mut last_tick = Instant::now();

            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::from_secs(0));

                let ready = match event::poll(timeout) {
                    Ok(ready) => ready,
                    Err(e) => {
                        warn!("Terminal event poll failed: {}", e);
                        break;
                    }
                };

                if ready {
                    let forwarded = match event::read() {
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
                        Ok(CrosstermEvent::Resize(..)) => Some(Event::Resize),
                        Ok(_) => None,
                        Err(e) => {
                            warn!("Terminal event read failed: {}", e);
                            break;
                        }
                    };

                    if let Some(event) = forwarded {
                        if sender.blocking_send(event).is_err() {
                            break;
                        }
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if sender.blocking_send(Event::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { receiver }
    }

    /// `None` once the polling thread has stopped.
    pub async fn next(&mut self) -> Option<Event> {
        self.receiver.recv().await
    }
}
