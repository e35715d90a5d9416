//! folio-tui - Terminal navigator for the compiled portfolio content
//!
//! Loads the JSON document written by `folio-gen` and presents it as three
//! panels (sections, items, preview) driven by vim-style keys.
//!
//! The interesting part is [`state::NavigationState`]: a small synchronous
//! state machine that every key press goes through via
//! [`keymap::apply_key`]. Rendering only reads from it.

pub mod components;
pub mod data;
pub mod event;
pub mod keymap;
pub mod renderer;
pub mod state;

pub use components::status_line;
pub use data::{DEFAULT_DATA_PATH, load_sections, try_load_sections};
pub use event::{Event, EventHandler};
pub use keymap::{KeyOutcome, NavKey, apply_key};
pub use renderer::{TuiRenderer, render_frame};
pub use state::{NavigationSnapshot, NavigationState, Panel, SubscriptionId};

/// Initialize logging; `RUST_LOG` overrides the `info` default
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}
