//! Keyboard event handling

use crossterm::event::{KeyCode, KeyEvent};

use crate::core::AppState;

/// Actions that can result from key handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// No action needed
    None,
    /// Quit the application
    Quit,
    /// Move focus one tile left
    MoveLeft,
    /// Move focus one tile right
    MoveRight,
    /// Move focus one grid row up
    MoveUp,
    /// Move focus one grid row down
    MoveDown,
    /// Move focus to the first tile
    MoveToStart,
    /// Move focus to the last tile
    MoveToEnd,
    /// Activate the focused tile
    Activate,
    /// Activate the up tile, when one exists
    GoUp,
    /// Re-list the current directory
    Refresh,
    /// Close the popup overlay
    ClosePopup,
}

/// Handle key event and return the resulting action
pub fn handle_key_event(state: &AppState, key: KeyEvent) -> KeyAction {
    // While the popup is open, any key dismisses it.
    if state.popup.is_some() {
        return KeyAction::ClosePopup;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Left | KeyCode::Char('h') => KeyAction::MoveLeft,
        KeyCode::Right | KeyCode::Char('l') => KeyAction::MoveRight,
        KeyCode::Up | KeyCode::Char('k') => KeyAction::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::MoveDown,
        KeyCode::Home | KeyCode::Char('g') => KeyAction::MoveToStart,
        KeyCode::End | KeyCode::Char('G') => KeyAction::MoveToEnd,
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Activate,
        KeyCode::Backspace => KeyAction::GoUp,
        KeyCode::Char('r') => KeyAction::Refresh,
        _ => KeyAction::None,
    }
}
