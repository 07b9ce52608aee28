//! Event handling for the storefront view
//!
//! Maps keyboard and mouse events onto [`ViewState`] transitions. Each
//! overlay mode has its own handler; only one overlay is ever focused.

use super::state::{Mode, ViewState};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Search term or category changed and the grid was refiltered
    FilterChanged,
    /// Exit the view
    Quit,
    /// No action taken
    Ignored,
}

/// Dispatch a key event to the handler of the current mode
pub fn handle_key(state: &mut ViewState, key: KeyEvent) -> EventResult {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.quit();
        return EventResult::Quit;
    }

    match state.mode() {
        Mode::Normal => handle_normal_mode(state, key),
        Mode::Details => handle_details_mode(state, key),
        Mode::CategoryMenu => handle_category_menu(state, key),
        Mode::Help => handle_help_mode(state),
    }
}

/// Handle events while browsing the grid
fn handle_normal_mode(state: &mut ViewState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => {
            state.quit();
            EventResult::Quit
        }
        (KeyCode::Enter, _) => {
            if state.open_current() {
                EventResult::Continue
            } else {
                EventResult::Ignored
            }
        }

        // Grid navigation
        (KeyCode::Left, _) => {
            state.cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.cursor_right();
            EventResult::Continue
        }
        (KeyCode::Up, _) => {
            state.cursor_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) => {
            state.cursor_down();
            EventResult::Continue
        }
        (KeyCode::PageUp, _) => {
            state.page_up();
            EventResult::Continue
        }
        (KeyCode::PageDown, _) => {
            state.page_down();
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.jump_to_start();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            state.jump_to_end();
            EventResult::Continue
        }

        // Category navigation
        (KeyCode::Tab, _) => {
            state.next_category();
            EventResult::FilterChanged
        }
        (KeyCode::BackTab, _) => {
            state.prev_category();
            EventResult::FilterChanged
        }
        (KeyCode::F(2), _) | (KeyCode::Char('o'), KeyModifiers::CONTROL) => {
            state.open_category_menu();
            EventResult::Continue
        }

        // Help overlay
        (KeyCode::F(1), _) => {
            state.open_help();
            EventResult::Continue
        }
        (KeyCode::Char('?'), _) if state.search().is_empty() => {
            state.open_help();
            EventResult::Continue
        }

        // Search editing
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => filter_changed(state.search_clear()),
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => filter_changed(state.search_delete_word()),
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.search_push(c);
            EventResult::FilterChanged
        }
        (KeyCode::Backspace, _) => filter_changed(state.search_backspace()),

        _ => EventResult::Ignored,
    }
}

const fn filter_changed(changed: bool) -> EventResult {
    if changed {
        EventResult::FilterChanged
    } else {
        EventResult::Ignored
    }
}

/// Handle events while the detail overlay is open
fn handle_details_mode(state: &mut ViewState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
            state.close_details();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Handle events while the category slide-over is open
fn handle_category_menu(state: &mut ViewState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::F(2) => {
            state.close_category_menu();
            EventResult::Continue
        }
        KeyCode::Up => {
            state.menu_up();
            EventResult::Continue
        }
        KeyCode::Down => {
            state.menu_down();
            EventResult::Continue
        }
        KeyCode::Enter => {
            state.menu_select();
            EventResult::FilterChanged
        }
        _ => EventResult::Ignored,
    }
}

/// Handle events in help mode
fn handle_help_mode(state: &mut ViewState) -> EventResult {
    // Any key closes help
    state.close_help();
    EventResult::Continue
}

/// Handle mouse events
fn handle_mouse(state: &mut ViewState, mouse: MouseEvent) -> EventResult {
    match (state.mode(), mouse.kind) {
        (Mode::Normal, MouseEventKind::ScrollUp) => {
            state.cursor_up();
            EventResult::Continue
        }
        (Mode::Normal, MouseEventKind::ScrollDown) => {
            state.cursor_down();
            EventResult::Continue
        }
        (Mode::CategoryMenu, MouseEventKind::ScrollUp) => {
            state.menu_up();
            EventResult::Continue
        }
        (Mode::CategoryMenu, MouseEventKind::ScrollDown) => {
            state.menu_down();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut ViewState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => handle_key(state, key),
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}
