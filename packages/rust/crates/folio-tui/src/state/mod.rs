//! Navigation state for the three-panel navigator
//!
//! [`NavigationState`] owns the loaded sections plus the four pieces of UI
//! state: focused panel, section index, item index and the preview expansion
//! flag. All writes go through the named operations below; the derived views
//! (`current_section`, `current_items`, `selected_item`) are recomputed on
//! every read.
//!
//! Indices are clamped when written, so the stored values always point at
//! something displayable (or are 0 when there is nothing to display).

use folio_types::{NavigationItem, NavigationSection};

/// A panel that can hold keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Panel {
    /// Section list
    #[default]
    Nav,
    /// Items of the current section
    List,
    /// Selected item
    Preview,
}

impl Panel {
    /// Next panel to the right, saturating at `Preview`.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Nav => Self::List,
            Self::List | Self::Preview => Self::Preview,
        }
    }

    /// Next panel to the left, saturating at `Nav`.
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Preview => Self::List,
            Self::List | Self::Nav => Self::Nav,
        }
    }
}

/// Copy of the mutable fields, handed to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationSnapshot {
    /// Panel holding focus
    pub focused_panel: Panel,
    /// Selected section
    pub section_index: usize,
    /// Selected item within the section
    pub item_index: usize,
    /// Whether the preview fills the content area
    pub preview_expanded: bool,
}

/// Handle returned by [`NavigationState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&NavigationSnapshot)>;

/// Main navigation state
pub struct NavigationState {
    sections: Vec<NavigationSection>,
    current: NavigationSnapshot,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl std::fmt::Debug for NavigationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationState")
            .field("sections", &self.sections.len())
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl NavigationState {
    /// Create state over `sections`, focused on the nav panel with
    /// everything else at its initial value.
    #[must_use]
    pub fn new(sections: Vec<NavigationSection>) -> Self {
        Self {
            sections,
            current: NavigationSnapshot::default(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Create state with no sections.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// All sections, in display order.
    #[must_use]
    pub fn sections(&self) -> &[NavigationSection] {
        &self.sections
    }

    /// Number of sections.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Current values of the mutable fields.
    #[must_use]
    pub fn snapshot(&self) -> NavigationSnapshot {
        self.current
    }

    /// Panel holding focus.
    #[must_use]
    pub fn focused_panel(&self) -> Panel {
        self.current.focused_panel
    }

    /// Selected section index.
    #[must_use]
    pub fn section_index(&self) -> usize {
        self.current.section_index
    }

    /// Selected item index.
    #[must_use]
    pub fn item_index(&self) -> usize {
        self.current.item_index
    }

    /// Whether the preview is expanded.
    #[must_use]
    pub fn is_preview_expanded(&self) -> bool {
        self.current.preview_expanded
    }

    /// Section at the stored index, falling back to the first section.
    #[must_use]
    pub fn current_section(&self) -> Option<&NavigationSection> {
        self.sections
            .get(self.current.section_index)
            .or_else(|| self.sections.first())
    }

    /// Items of the current section; empty when there are no sections.
    #[must_use]
    pub fn current_items(&self) -> &[NavigationItem] {
        self.current_section()
            .map_or(&[], |section| section.items.as_slice())
    }

    /// Item at the stored index, if any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&NavigationItem> {
        self.current_items().get(self.current.item_index)
    }

    // ------------------------------------------------------------------
    // Writes
    // ------------------------------------------------------------------

    /// Move focus right: nav -> list -> preview (stays at preview).
    pub fn focus_next(&mut self) {
        let panel = self.current.focused_panel.next();
        self.update(|s| s.focused_panel = panel);
    }

    /// Move focus left: preview -> list -> nav (stays at nav).
    pub fn focus_prev(&mut self) {
        let panel = self.current.focused_panel.prev();
        self.update(|s| s.focused_panel = panel);
    }

    /// Focus a specific panel.
    pub fn focus(&mut self, panel: Panel) {
        self.update(|s| s.focused_panel = panel);
    }

    /// Select a section and reset the item selection.
    ///
    /// Out-of-range indices are clamped to the last section.
    pub fn select_section(&mut self, index: usize) {
        let index = index.min(self.sections.len().saturating_sub(1));
        self.update(|s| {
            s.section_index = index;
            s.item_index = 0;
        });
    }

    /// Select an item of the current section.
    ///
    /// Out-of-range indices are clamped to the last item.
    pub fn select_item(&mut self, index: usize) {
        let index = index.min(self.current_items().len().saturating_sub(1));
        self.update(|s| s.item_index = index);
    }

    /// Select the section below, if any.
    pub fn select_next_section(&mut self) {
        if self.current.section_index + 1 < self.sections.len() {
            self.select_section(self.current.section_index + 1);
        }
    }

    /// Select the section above, if any.
    pub fn select_prev_section(&mut self) {
        if self.current.section_index > 0 {
            self.select_section(self.current.section_index - 1);
        }
    }

    /// Select the item below, if any.
    pub fn select_next_item(&mut self) {
        if self.current.item_index + 1 < self.current_items().len() {
            self.select_item(self.current.item_index + 1);
        }
    }

    /// Select the item above, if any.
    pub fn select_prev_item(&mut self) {
        if self.current.item_index > 0 {
            self.select_item(self.current.item_index - 1);
        }
    }

    /// Flip the preview expansion flag.
    pub fn toggle_expanded(&mut self) {
        self.update(|s| s.preview_expanded = !s.preview_expanded);
    }

    /// Set the preview expansion flag.
    pub fn set_expanded(&mut self, expanded: bool) {
        self.update(|s| s.preview_expanded = expanded);
    }

    // ------------------------------------------------------------------
    // Subscriptions
    // ------------------------------------------------------------------

    /// Register a listener.
    ///
    /// The listener is called once immediately with the current snapshot and
    /// then synchronously after every write, before the write returns.
    pub fn subscribe<F>(&mut self, mut listener: F) -> SubscriptionId
    where
        F: FnMut(&NavigationSnapshot) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        listener(&self.current);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn update(&mut self, apply: impl FnOnce(&mut NavigationSnapshot)) {
        apply(&mut self.current);
        let snapshot = self.current;
        for (_, listener) in &mut self.listeners {
            listener(&snapshot);
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::empty()
    }
}
