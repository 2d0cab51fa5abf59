//! Stateless UI rendering for the game screen.

use noughts_core::{Mark, Position};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{App, Focus};
use super::widgets::{BoardHitMap, BoardView, Button, NameInput};

const INSTRUCTIONS: &str =
    "Click a cell or press 1-9 | Arrows + Enter: place | Tab: edit names | n: New Round | r: Full Reset | q: Quit";

/// Something on screen that reacts to a mouse press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// A board cell.
    Cell(Position),
    /// A player-name field.
    Name(Mark),
    /// The "New Round" button.
    NewRound,
    /// The "Full Reset" button.
    FullReset,
}

/// Where the clickable parts of the screen were drawn on the last frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hitboxes {
    board: BoardHitMap,
    name_x: Rect,
    name_o: Rect,
    new_round: Rect,
    full_reset: Rect,
}

impl Hitboxes {
    /// The board's cell areas.
    pub fn board(&self) -> &BoardHitMap {
        &self.board
    }

    /// Area of the name field for `mark`.
    pub fn name(&self, mark: Mark) -> Rect {
        match mark {
            Mark::X => self.name_x,
            Mark::O => self.name_o,
        }
    }

    /// Area of the "New Round" button.
    pub fn new_round(&self) -> Rect {
        self.new_round
    }

    /// Area of the "Full Reset" button.
    pub fn full_reset(&self) -> Rect {
        self.full_reset
    }

    /// What sits under a terminal coordinate.
    pub fn target(&self, column: u16, row: u16) -> Option<ClickTarget> {
        let mut hit = None;
        if self.board.dispatch(column, row, |pos| hit = Some(ClickTarget::Cell(pos))) {
            return hit;
        }
        let point = (column, row).into();
        if self.name_x.contains(point) {
            Some(ClickTarget::Name(Mark::X))
        } else if self.name_o.contains(point) {
            Some(ClickTarget::Name(Mark::O))
        } else if self.new_round.contains(point) {
            Some(ClickTarget::NewRound)
        } else if self.full_reset.contains(point) {
            Some(ClickTarget::FullReset)
        } else {
            None
        }
    }
}

/// Draws the whole screen and reports where the clickable parts landed.
pub fn draw(frame: &mut Frame, app: &App) -> Hitboxes {
    let session = app.session();
    let mut hitboxes = Hitboxes::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                    // Title
            Constraint::Length(3),                    // Names
            Constraint::Length(3),                    // Status
            Constraint::Length(3),                    // Scoreboard
            Constraint::Min(BoardView::HEIGHT),       // Board
            Constraint::Length(3),                    // Buttons
            Constraint::Length(3),                    // Instructions
        ])
        .split(frame.area());

    let title = Paragraph::new("Noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let names = halves(chunks[1]);
    for (mark, area) in [(Mark::X, names[0]), (Mark::O, names[1])] {
        let focused = app.focus() == Focus::Name(mark);
        frame.render_widget(NameInput::new(mark, session.names().get(mark), focused), area);
    }
    hitboxes.name_x = names[0];
    hitboxes.name_o = names[1];

    let status_style = if session.outcome().is_over() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let last_move = session
        .history()
        .last()
        .map(|pos| format!(" Last: {} ", pos.label()))
        .unwrap_or_default();
    let status = Paragraph::new(session.status_text())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Round {} ", session.round()))
                .title_bottom(Line::from(last_move).right_aligned()),
        );
    frame.render_widget(status, chunks[2]);

    frame.render_widget(scoreboard(app), chunks[3]);

    let cursor = (app.focus() == Focus::Board).then_some(app.cursor());
    let board = BoardView::new(session.board())
        .winning_line(session.winning_line())
        .cursor(cursor);
    frame.render_stateful_widget(board, chunks[4], &mut hitboxes.board);

    let buttons = halves(chunks[5]);
    frame.render_widget(Button::new("New Round", 'n'), buttons[0]);
    frame.render_widget(Button::new("Full Reset", 'r'), buttons[1]);
    hitboxes.new_round = buttons[0];
    hitboxes.full_reset = buttons[1];

    let help = Paragraph::new(INSTRUCTIONS)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[6]);

    hitboxes
}

fn scoreboard(app: &App) -> Paragraph<'static> {
    let session = app.session();
    let scores = session.scores();
    let names = session.names();
    let line = Line::from(vec![
        Span::styled(
            format!("{} (X): {}", names.get(Mark::X), scores.wins(Mark::X)),
            Style::default().fg(Color::Blue),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{} (O): {}", names.get(Mark::O), scores.wins(Mark::O)),
            Style::default().fg(Color::Red),
        ),
        Span::raw("   "),
        Span::raw(format!("Draws: {}", scores.draws())),
    ]);
    Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Scoreboard "))
}

fn halves(area: Rect) -> [Rect; 2] {
    let split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    [split[0], split[1]]
}
