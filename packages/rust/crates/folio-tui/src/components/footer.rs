use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::state::NavigationState;

/// Status line text for the current selection.
#[must_use]
pub fn status_line(state: &NavigationState) -> String {
    let section = state
        .current_section()
        .map_or("None", |section| section.name.as_str());
    let item = state.selected_item().map_or("None", |item| item.title());
    format!("Navigation: hjkl or arrow keys | Section: {section} | Item: {item}")
}

/// Bottom status bar
#[derive(Debug, Clone, Copy)]
pub struct Footer<'a> {
    state: &'a NavigationState,
}

impl<'a> Footer<'a> {
    /// Create a footer over `state`
    #[must_use]
    pub fn new(state: &'a NavigationState) -> Self {
        Self { state }
    }

    /// Render the footer
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let status =
            Paragraph::new(status_line(self.state)).style(Style::default().fg(Color::DarkGray));
        f.render_widget(status, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::{ContentItem, NavigationSection, SectionId};

    #[test]
    fn test_status_line_with_selection() {
        let state = NavigationState::new(vec![
            NavigationSection::empty(SectionId::Projects)
                .with_items(vec![ContentItem::new("alpha").with_title("Alpha").into()]),
        ]);
        assert_eq!(
            status_line(&state),
            "Navigation: hjkl or arrow keys | Section: Projects | Item: Alpha"
        );
    }

    #[test]
    fn test_status_line_without_data() {
        assert_eq!(
            status_line(&NavigationState::empty()),
            "Navigation: hjkl or arrow keys | Section: None | Item: None"
        );
    }
}
