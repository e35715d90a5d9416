use folio_types::NavigationItem;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use super::{highlight_style, panel_block};
use crate::state::{NavigationState, Panel};

/// Items of the current section, middle column
#[derive(Debug, Clone, Copy)]
pub struct ListPanel<'a> {
    state: &'a NavigationState,
}

impl<'a> ListPanel<'a> {
    /// Create a list panel over `state`
    #[must_use]
    pub fn new(state: &'a NavigationState) -> Self {
        Self { state }
    }

    fn title(&self) -> String {
        self.state
            .current_section()
            .map_or_else(|| " Items ".to_string(), |s| format!(" {} {} ", s.icon, s.name))
    }

    fn row(item: &NavigationItem) -> ListItem<'static> {
        let mut spans = vec![Span::raw(item.title().to_string())];
        let detail = match item {
            NavigationItem::Content(content) => content.date.clone(),
            NavigationItem::Link(link) => link.icon.clone(),
        };
        if !detail.is_empty() {
            spans.push(Span::styled(
                format!("  {detail}"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        ListItem::new(Line::from(spans))
    }

    /// Render the panel
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let focused = self.state.focused_panel() == Panel::List;
        let block = panel_block(self.title(), focused);
        let items = self.state.current_items();

        if items.is_empty() {
            let empty = Paragraph::new("No items")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            f.render_widget(empty, area);
            return;
        }

        let list = List::new(items.iter().map(Self::row).collect::<Vec<_>>())
            .block(block)
            .highlight_style(highlight_style(focused))
            .highlight_symbol("> ");
        let mut list_state = ListState::default().with_selected(Some(self.state.item_index()));
        f.render_stateful_widget(list, area, &mut list_state);
    }
}
