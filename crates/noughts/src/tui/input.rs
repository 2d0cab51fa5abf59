//! Input translation: crossterm events to application events, and cursor
//! movement for keyboard play.

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use noughts_core::Position;

/// Input the application reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// A key press.
    Key(KeyCode),
    /// Left mouse button pressed at a terminal coordinate.
    Click {
        /// Column of the press.
        column: u16,
        /// Row of the press.
        row: u16,
    },
    /// Ctrl+C, honoured whatever has focus.
    Quit,
}

/// Maps a terminal event to an [`AppEvent`]. Key releases and mouse events
/// other than a left press are dropped.
pub fn translate(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Release => None,
        Event::Key(key)
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') =>
        {
            Some(AppEvent::Quit)
        }
        Event::Key(key) => Some(AppEvent::Key(key.code)),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(AppEvent::Click {
                column: mouse.column,
                row: mouse.row,
            }),
            _ => None,
        },
        _ => None,
    }
}

/// Moves the cursor one cell for an arrow key, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => (row + 1, col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, col + 1),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState, MouseEvent};

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        })
    }

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_move_cursor() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Enter), Position::Center);
    }

    #[test]
    fn test_translate_keys() {
        let press = key(KeyCode::Char('n'), KeyModifiers::NONE, KeyEventKind::Press);
        assert_eq!(translate(press), Some(AppEvent::Key(KeyCode::Char('n'))));

        let release = key(KeyCode::Char('n'), KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(translate(release), None);

        let ctrl_c = key(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press);
        assert_eq!(translate(ctrl_c), Some(AppEvent::Quit));
    }

    #[test]
    fn test_translate_mouse() {
        assert_eq!(
            translate(mouse(MouseEventKind::Down(MouseButton::Left))),
            Some(AppEvent::Click { column: 7, row: 3 })
        );
        assert_eq!(translate(mouse(MouseEventKind::Down(MouseButton::Right))), None);
        assert_eq!(translate(mouse(MouseEventKind::Up(MouseButton::Left))), None);
        assert_eq!(translate(mouse(MouseEventKind::Moved)), None);
    }
}
