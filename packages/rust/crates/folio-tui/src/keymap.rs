//! Key handling for the navigator
//!
//! Terminal keys are normalized to [`NavKey`] by the event layer; this module
//! decides what each key does given the focused panel and selection.

use crate::state::{NavigationState, Panel};

/// Normalized navigation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    /// `h` or left arrow
    Left,
    /// `l` or right arrow
    Right,
    /// `k` or up arrow
    Up,
    /// `j` or down arrow
    Down,
    /// Enter
    Enter,
    /// Escape
    Escape,
    /// `q` or Ctrl-c
    Quit,
}

/// What happened in response to a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// State was updated
    Handled,
    /// Key has no meaning here
    Ignored,
    /// The selected link should be opened externally
    OpenLink(String),
    /// Leave the navigator
    Quit,
}

/// Apply `key` to `state`.
pub fn apply_key(state: &mut NavigationState, key: NavKey) -> KeyOutcome {
    match key {
        NavKey::Quit => KeyOutcome::Quit,
        NavKey::Escape => {
            if state.is_preview_expanded() {
                state.set_expanded(false);
                KeyOutcome::Handled
            } else {
                KeyOutcome::Ignored
            }
        }
        NavKey::Left => {
            state.focus_prev();
            KeyOutcome::Handled
        }
        NavKey::Right | NavKey::Enter => activate(state),
        NavKey::Up | NavKey::Down => move_selection(state, key == NavKey::Down),
    }
}

fn activate(state: &mut NavigationState) -> KeyOutcome {
    match state.focused_panel() {
        Panel::Nav => {
            state.focus_next();
            KeyOutcome::Handled
        }
        Panel::List => {
            if let Some(url) = selected_link(state) {
                return KeyOutcome::OpenLink(url);
            }
            state.focus_next();
            KeyOutcome::Handled
        }
        Panel::Preview => {
            if let Some(url) = selected_link(state) {
                return KeyOutcome::OpenLink(url);
            }
            if state.selected_item().is_some() {
                state.toggle_expanded();
                KeyOutcome::Handled
            } else {
                KeyOutcome::Ignored
            }
        }
    }
}

fn move_selection(state: &mut NavigationState, down: bool) -> KeyOutcome {
    match (state.focused_panel(), down) {
        (Panel::Nav, true) => state.select_next_section(),
        (Panel::Nav, false) => state.select_prev_section(),
        (Panel::List, true) => state.select_next_item(),
        (Panel::List, false) => state.select_prev_item(),
        (Panel::Preview, _) => return KeyOutcome::Ignored,
    }
    KeyOutcome::Handled
}

fn selected_link(state: &NavigationState) -> Option<String> {
    state.selected_item()?.url().map(str::to_string)
}
