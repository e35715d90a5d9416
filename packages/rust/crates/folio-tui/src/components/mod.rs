//! Navigator panels and the status line

mod footer;
mod list;
mod nav;
mod preview;

pub use footer::{Footer, status_line};
pub use list::ListPanel;
pub use nav::NavPanel;
pub use preview::PreviewPanel;

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block, cyan when focused.
pub(crate) fn panel_block(title: String, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style)
}

/// Style for the selected row of a list.
pub(crate) fn highlight_style(focused: bool) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    if focused {
        style.fg(Color::Black).bg(Color::Cyan)
    } else {
        style.fg(Color::Cyan)
    }
}
