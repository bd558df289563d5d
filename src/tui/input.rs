//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages. The mapping depends on whether the
//! search input currently has focus: while focused, printable keys edit the
//! query instead of triggering shortcuts.

use super::messages::AppMsg;

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(
    key: &bubbletea_rs::event::KeyMsg,
    search_focused: bool,
) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    if search_focused {
        return match key.key {
            KeyCode::Enter => Some(AppMsg::SubmitSearch),
            KeyCode::Esc => Some(AppMsg::EscapePressed),
            KeyCode::Backspace => Some(AppMsg::SearchInputBackspace),
            KeyCode::Char(ch) => Some(AppMsg::SearchInputChar(ch)),
            _ => None,
        };
    }

    match key.key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('/') => Some(AppMsg::FocusSearch),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::PageDown => Some(AppMsg::PageDown),
        KeyCode::PageUp => Some(AppMsg::PageUp),
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::Home),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::End),
        KeyCode::Char('s') => Some(AppMsg::CycleSort),
        KeyCode::Char('l') => Some(AppMsg::CycleLanguage),
        KeyCode::Char('x') => Some(AppMsg::ClearRefinement),
        KeyCode::Char('c') | KeyCode::Char(' ') => Some(AppMsg::ToggleCompare),
        KeyCode::Enter => Some(AppMsg::OpenDetails),
        KeyCode::Esc => Some(AppMsg::EscapePressed),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}
