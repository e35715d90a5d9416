use ratatui::{
    Frame,
    layout::Rect,
    widgets::{List, ListItem, ListState},
};

use super::{highlight_style, panel_block};
use crate::state::{NavigationState, Panel};

/// Section list, leftmost column
#[derive(Debug, Clone, Copy)]
pub struct NavPanel<'a> {
    state: &'a NavigationState,
}

impl<'a> NavPanel<'a> {
    /// Create a nav panel over `state`
    #[must_use]
    pub fn new(state: &'a NavigationState) -> Self {
        Self { state }
    }

    /// One label per section: icon, name and item count.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.state
            .sections()
            .iter()
            .map(|section| {
                format!(
                    "{} {} ({})",
                    section.icon,
                    section.name,
                    section.items.len()
                )
            })
            .collect()
    }

    /// Render the panel
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let focused = self.state.focused_panel() == Panel::Nav;
        let items: Vec<ListItem> = self.labels().into_iter().map(ListItem::new).collect();
        let list = List::new(items)
            .block(panel_block(" Sections ".to_string(), focused))
            .highlight_style(highlight_style(focused))
            .highlight_symbol("> ");

        let selected = (self.state.section_count() > 0).then(|| self.state.section_index());
        let mut list_state = ListState::default().with_selected(selected);
        f.render_stateful_widget(list, area, &mut list_state);
    }
}
