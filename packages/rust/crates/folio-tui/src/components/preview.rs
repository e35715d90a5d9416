use folio_types::NavigationItem;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Wrap},
};

use super::panel_block;
use crate::state::{NavigationState, Panel};

/// Selected item, rightmost column (or the whole content area when expanded)
#[derive(Debug, Clone, Copy)]
pub struct PreviewPanel<'a> {
    state: &'a NavigationState,
}

impl<'a> PreviewPanel<'a> {
    /// Create a preview panel over `state`
    #[must_use]
    pub fn new(state: &'a NavigationState) -> Self {
        Self { state }
    }

    /// Text shown for the selected item.
    #[must_use]
    pub fn text(&self) -> Text<'a> {
        let Some(item) = self.state.selected_item() else {
            return Text::styled("Select an item to preview", Style::default().fg(Color::DarkGray));
        };

        let dim = Style::default().fg(Color::DarkGray);
        let mut lines = vec![Line::from(Span::styled(
            item.title(),
            Style::default().add_modifier(Modifier::BOLD),
        ))];

        match item {
            NavigationItem::Content(content) => {
                let mut meta = vec![content.kind.as_str().to_string()];
                if !content.date.is_empty() {
                    meta.push(content.date.clone());
                }
                if !content.tags.is_empty() {
                    meta.push(content.tags.join(", "));
                }
                lines.push(Line::styled(meta.join(" | "), dim));
                if !content.description.is_empty() {
                    lines.push(Line::raw(""));
                    lines.push(Line::styled(
                        content.description.as_str(),
                        Style::default().add_modifier(Modifier::ITALIC),
                    ));
                }
                lines.push(Line::raw(""));
                lines.extend(content.body.lines().map(Line::raw));
            }
            NavigationItem::Link(link) => {
                if !link.description.is_empty() {
                    lines.push(Line::raw(""));
                    lines.push(Line::raw(link.description.as_str()));
                }
                lines.push(Line::raw(""));
                lines.push(Line::styled(link.url.as_str(), Style::default().fg(Color::Cyan)));
            }
        }
        Text::from(lines)
    }

    /// Render the panel
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let focused = self.state.focused_panel() == Panel::Preview;
        let hint = if self.state.is_preview_expanded() {
            " Preview (Esc to collapse) "
        } else {
            " Preview "
        };
        let paragraph = Paragraph::new(self.text())
            .block(panel_block(hint.to_string(), focused))
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }
}
