//! Mouse input handling

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Actions triggered by mouse events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    None,
    /// Left button pressed at a screen position
    Click { column: u16, row: u16 },
    ScrollUp,
    ScrollDown,
}

/// Map a crossterm mouse event to an action
pub fn handle_mouse_event(event: MouseEvent) -> MouseAction {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => MouseAction::Click {
            column: event.column,
            row: event.row,
        },
        MouseEventKind::ScrollUp => MouseAction::ScrollUp,
        MouseEventKind::ScrollDown => MouseAction::ScrollDown,
        _ => MouseAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_left_click_reports_position() {
        let action = handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 12, 5));
        assert_eq!(action, MouseAction::Click { column: 12, row: 5 });
    }

    #[test]
    fn test_scroll_events() {
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::ScrollUp, 0, 0)),
            MouseAction::ScrollUp
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::ScrollDown, 0, 0)),
            MouseAction::ScrollDown
        );
    }

    #[test]
    fn test_other_events_are_ignored() {
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Right), 3, 3)),
            MouseAction::None
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Moved, 3, 3)),
            MouseAction::None
        );
    }
}
