//! TUI Renderer - Main rendering loop and terminal management

use crate::{
    components::{Footer, ListPanel, NavPanel, PreviewPanel},
    event::{Event, EventHandler, EventHandlerConfig},
    keymap::{KeyOutcome, apply_key},
    state::NavigationState,
};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, warn};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::stdout;

/// TUI Renderer using Crossterm backend
pub struct TuiRenderer {
    terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
    event_handler: EventHandler,
}

impl TuiRenderer {
    /// Put the terminal in raw mode and start the input thread
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be initialized.
    pub fn new() -> Result<Self, anyhow::Error> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;

        let event_handler = EventHandler::new(EventHandlerConfig::default());

        Ok(Self {
            terminal,
            event_handler,
        })
    }

    /// Run the main event loop until the user quits
    ///
    /// # Errors
    ///
    /// Returns an error if drawing fails.
    pub fn run(&mut self, state: &mut NavigationState) -> Result<(), anyhow::Error> {
        loop {
            self.terminal.draw(|f| render_frame(f, state))?;

            match self.event_handler.next() {
                Ok(Event::Input(key)) => match apply_key(state, key) {
                    KeyOutcome::Quit => break,
                    KeyOutcome::OpenLink(url) => open_link(&url),
                    KeyOutcome::Handled | KeyOutcome::Ignored => {}
                },
                Ok(Event::Resize(width, height)) => {
                    debug!("Terminal resized to {width}x{height}");
                }
                Ok(Event::Error(message)) => {
                    warn!("{message}");
                    break;
                }
                Err(_) => break,
            }
        }

        Self::restore_terminal()
    }

    /// Restore terminal to normal mode
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal mode cannot be reset.
    pub fn restore_terminal() -> Result<(), anyhow::Error> {
        disable_raw_mode()?;
        execute!(stdout(), LeaveAlternateScreen)?;
        Ok(())
    }
}

impl Drop for TuiRenderer {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen);
    }
}

/// Draw one frame: three columns (or the expanded preview) over a status line.
pub fn render_frame(f: &mut Frame, state: &NavigationState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    if state.is_preview_expanded() {
        PreviewPanel::new(state).render(f, rows[0]);
    } else {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(20),
                Constraint::Percentage(30),
                Constraint::Percentage(50),
            ])
            .split(rows[0]);
        NavPanel::new(state).render(f, columns[0]);
        ListPanel::new(state).render(f, columns[1]);
        PreviewPanel::new(state).render(f, columns[2]);
    }

    Footer::new(state).render(f, rows[1]);
}

fn open_link(url: &str) {
    debug!("Opening {url}");
    if let Err(err) = open::that(url) {
        warn!("Failed to open {url}: {err}");
    }
}
