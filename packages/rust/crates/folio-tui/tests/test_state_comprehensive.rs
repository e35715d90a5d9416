//! Comprehensive tests for folio-tui navigation state

use std::cell::RefCell;
use std::rc::Rc;

use folio_tui::{KeyOutcome, NavKey, NavigationState, Panel, apply_key};
use folio_types::{ContentItem, ExternalLink, NavigationItem, NavigationSection, SectionId};

fn fixture() -> NavigationState {
    NavigationState::new(vec![
        NavigationSection::empty(SectionId::Projects).with_items(vec![
            ContentItem::new("p1").with_title("Project 1").into(),
            ContentItem::new("p2").with_title("Project 2").into(),
            ContentItem::new("p3").with_title("Project 3").into(),
        ]),
        NavigationSection::empty(SectionId::Experience),
        NavigationSection::empty(SectionId::Blog)
            .with_items(vec![ContentItem::new("b1").with_title("Post").into()]),
        NavigationSection::empty(SectionId::Links).with_items(vec![
            ExternalLink {
                id: "notes".to_string(),
                title: "Notes".to_string(),
                description: String::new(),
                url: "https://notes.example".to_string(),
                icon: "📝".to_string(),
            }
            .into(),
        ]),
    ])
}

/// Test: focus moves right five times and stops at preview, then back to nav
#[test]
fn test_focus_walk_saturates_both_ways() {
    let mut state = fixture();
    let mut panels = Vec::new();
    for _ in 0..5 {
        state.focus_next();
        panels.push(state.focused_panel());
    }
    assert_eq!(
        panels,
        [
            Panel::List,
            Panel::Preview,
            Panel::Preview,
            Panel::Preview,
            Panel::Preview
        ]
    );

    for _ in 0..5 {
        state.focus_prev();
    }
    assert_eq!(state.focused_panel(), Panel::Nav);
}

/// Test: changing section always resets the item index
#[test]
fn test_section_change_resets_item_index() {
    let mut state = fixture();
    state.select_item(2);
    assert_eq!(state.selected_item().map(NavigationItem::title), Some("Project 3"));

    state.select_section(2);
    assert_eq!(state.item_index(), 0);
    assert_eq!(state.selected_item().map(NavigationItem::title), Some("Post"));
}

/// Test: empty section has no selected item and clamps to zero
#[test]
fn test_empty_section_has_no_selection() {
    let mut state = fixture();
    state.select_section(1);
    state.select_item(4);
    assert_eq!(state.item_index(), 0);
    assert!(state.current_items().is_empty());
    assert!(state.selected_item().is_none());
}

/// Test: item selection clamps to the last item
#[test]
fn test_item_selection_clamps() {
    let mut state = fixture();
    state.select_item(99);
    assert_eq!(state.item_index(), 2);
    state.select_next_item();
    assert_eq!(state.item_index(), 2);
    state.select_prev_item();
    state.select_prev_item();
    state.select_prev_item();
    assert_eq!(state.item_index(), 0);
}

/// Test: expansion flag operations
#[test]
fn test_expansion_flag() {
    let mut state = fixture();
    state.toggle_expanded();
    assert!(state.is_preview_expanded());
    state.toggle_expanded();
    assert!(!state.is_preview_expanded());
    state.set_expanded(true);
    state.set_expanded(true);
    assert!(state.is_preview_expanded());
}

/// Test: a full keyboard session from sections to an opened link
#[test]
fn test_keyboard_session() {
    let mut state = fixture();
    for _ in 0..3 {
        assert_eq!(apply_key(&mut state, NavKey::Down), KeyOutcome::Handled);
    }
    assert_eq!(state.current_section().map(|s| s.id.as_str()), Some("links"));

    apply_key(&mut state, NavKey::Right);
    assert_eq!(state.focused_panel(), Panel::List);
    assert_eq!(
        apply_key(&mut state, NavKey::Right),
        KeyOutcome::OpenLink("https://notes.example".to_string())
    );

    apply_key(&mut state, NavKey::Left);
    apply_key(&mut state, NavKey::Up);
    assert_eq!(state.section_index(), 2);
    assert_eq!(apply_key(&mut state, NavKey::Quit), KeyOutcome::Quit);
}

/// Test: subscribers observe every write before it returns
#[test]
fn test_subscriber_sees_each_write() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let mut state = fixture();
    state.subscribe(move |snap| sink.borrow_mut().push((snap.section_index, snap.item_index)));

    state.select_item(1);
    assert_eq!(log.borrow().last(), Some(&(0, 1)));
    state.select_section(3);
    assert_eq!(log.borrow().last(), Some(&(3, 0)));
    assert_eq!(log.borrow().len(), 3);
}

/// Test: state with no sections is usable
#[test]
fn test_no_sections() {
    let mut state = NavigationState::empty();
    assert!(state.current_section().is_none());
    assert_eq!(apply_key(&mut state, NavKey::Down), KeyOutcome::Handled);
    assert_eq!(apply_key(&mut state, NavKey::Enter), KeyOutcome::Handled);
    assert_eq!(apply_key(&mut state, NavKey::Enter), KeyOutcome::Handled);
    assert_eq!(state.focused_panel(), Panel::Preview);
    assert_eq!(apply_key(&mut state, NavKey::Enter), KeyOutcome::Ignored);
    assert!(!state.is_preview_expanded());
}
