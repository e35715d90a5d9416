//! Event handling for the navigator - keyboard input and resize events

use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use std::{sync::mpsc, thread, time::Duration};

use crate::keymap::NavKey;

/// Event from the input thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Navigation key pressed
    Input(NavKey),
    /// Terminal resized; redraw on next frame
    Resize(u16, u16),
    /// Polling failed
    Error(String),
}

/// Convert a key press to a [`NavKey`].
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<NavKey> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return (key.code == KeyCode::Char('c')).then_some(NavKey::Quit);
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => Some(NavKey::Left),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Some(NavKey::Right),
        KeyCode::Up | KeyCode::Char('k') => Some(NavKey::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(NavKey::Down),
        KeyCode::Enter => Some(NavKey::Enter),
        KeyCode::Esc => Some(NavKey::Escape),
        KeyCode::Char('q') => Some(NavKey::Quit),
        _ => None,
    }
}

fn map_crossterm_event(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) => map_key(key).map(Event::Input),
        CrosstermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
        _ => None,
    }
}

/// Event handler configuration
#[derive(Debug, Clone)]
pub struct EventHandlerConfig {
    /// How long each poll waits before checking the channel again
    pub poll_interval: Duration,
}

impl Default for EventHandlerConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(250),
        }
    }
}

/// Polls the terminal on a background thread and forwards events.
pub struct EventHandler {
    receiver: mpsc::Receiver<Event>,
}

impl EventHandler {
    /// Spawn the input thread.
    ///
    /// The thread exits once the handler is dropped or polling fails.
    #[must_use]
    pub fn new(config: EventHandlerConfig) -> Self {
        let (sender, receiver) = mpsc::channel();

        thread::spawn(move || {
            loop {
                match event::poll(config.poll_interval) {
                    Ok(true) => match event::read() {
                        Ok(raw) => {
                            if let Some(event) = map_crossterm_event(raw)
                                && sender.send(event).is_err()
                            {
                                break;
                            }
                        }
                        Err(err) => {
                            let message = format!("Failed to read event: {err}");
                            let _ = sender.send(Event::Error(message));
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(err) => {
                        let message = format!("Failed to poll events: {err}");
                        let _ = sender.send(Event::Error(message));
                        break;
                    }
                }
            }
        });

        Self { receiver }
    }

    /// Receive the next event (blocking)
    ///
    /// # Errors
    ///
    /// Returns an error once the input thread has exited.
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}
