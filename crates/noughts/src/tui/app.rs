//! Application state and event handling.

use crossterm::event::KeyCode;
use noughts_core::{Mark, PlayerNames, Position, Session};
use tracing::{debug, instrument};

use super::input::{AppEvent, move_cursor};
use super::ui::{ClickTarget, Hitboxes};

/// Which part of the screen receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Keys play on the board.
    Board,
    /// Keys edit the name of the player behind this mark.
    Name(Mark),
}

impl Focus {
    /// Next stop for Tab.
    pub fn next(self) -> Self {
        match self {
            Focus::Board => Focus::Name(Mark::X),
            Focus::Name(Mark::X) => Focus::Name(Mark::O),
            Focus::Name(Mark::O) => Focus::Board,
        }
    }

    /// Next stop for Shift+Tab.
    pub fn previous(self) -> Self {
        match self {
            Focus::Board => Focus::Name(Mark::O),
            Focus::Name(Mark::O) => Focus::Name(Mark::X),
            Focus::Name(Mark::X) => Focus::Board,
        }
    }
}

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
///
/// Owns the [`Session`] and turns input into its transitions. The hitboxes
/// come from the previous frame so mouse presses land on what the user saw.
#[derive(Debug)]
pub struct App {
    session: Session,
    focus: Focus,
    cursor: Position,
    hitboxes: Hitboxes,
}

impl App {
    /// Creates the application with the board focused.
    pub fn new(names: PlayerNames) -> Self {
        Self {
            session: Session::new(names),
            focus: Focus::Board,
            cursor: Position::Center,
            hitboxes: Hitboxes::default(),
        }
    }

    /// The game session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The game session, mutable.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// What currently receives key presses.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Keyboard cursor on the board.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Records where the last frame put its clickable areas.
    pub fn set_hitboxes(&mut self, hitboxes: Hitboxes) {
        self.hitboxes = hitboxes;
    }

    /// Handles one input event to completion.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_event(&mut self, event: AppEvent) -> Control {
        match event {
            AppEvent::Quit => Control::Quit,
            AppEvent::Click { column, row } => {
                self.handle_click(column, row);
                Control::Continue
            }
            AppEvent::Key(code) => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::Name(mark) => {
                    self.handle_name_key(mark, code);
                    Control::Continue
                }
            },
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) -> Control {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.session.click(index);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.session.click(self.cursor.to_index());
            }
            KeyCode::Char('n') | KeyCode::Char('N') => self.session.new_round(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.session.full_reset(),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, code);
            }
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.previous(),
            _ => {}
        }
        Control::Continue
    }

    fn handle_name_key(&mut self, mark: Mark, code: KeyCode) {
        match code {
            KeyCode::Char(c) => self.session.names_mut().get_mut(mark).push(c),
            KeyCode::Backspace => {
                self.session.names_mut().get_mut(mark).pop();
            }
            KeyCode::Enter | KeyCode::Esc => self.focus = Focus::Board,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.previous(),
            _ => {}
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        let Some(target) = self.hitboxes.target(column, row) else {
            debug!(column, row, "Click outside any control");
            return;
        };
        debug!(?target, "Click");
        match target {
            ClickTarget::Cell(pos) => {
                self.focus = Focus::Board;
                self.cursor = pos;
                self.session.click(pos.to_index());
            }
            ClickTarget::Name(mark) => self.focus = Focus::Name(mark),
            ClickTarget::NewRound => self.session.new_round(),
            ClickTarget::FullReset => self.session.full_reset(),
        }
    }
}
