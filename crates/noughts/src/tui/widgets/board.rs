//! Tic-tac-toe board rendering and click routing.

use noughts_core::{Board, Position, WinLine};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{StatefulWidget, Widget},
};

use super::CellView;

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;

/// Screen area of each cell from the last render.
///
/// Lets a mouse press be turned back into the index of the cell under it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardHitMap {
    cells: [Rect; 9],
}

impl BoardHitMap {
    /// Area the cell at `pos` was drawn into.
    pub fn cell_area(&self, pos: Position) -> Rect {
        self.cells[pos.to_index()]
    }

    /// Cell under a terminal coordinate.
    pub fn position_at(&self, column: u16, row: u16) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|pos| self.cells[pos.to_index()].contains((column, row).into()))
    }

    /// Calls `on_click` with the cell under the pointer. Returns false when
    /// the pointer is not over a cell.
    pub fn dispatch(&self, column: u16, row: u16, on_click: impl FnOnce(Position)) -> bool {
        match self.position_at(column, row) {
            Some(pos) => {
                on_click(pos);
                true
            }
            None => false,
        }
    }
}

/// The 3x3 grid of [`CellView`]s.
///
/// Cells on the winning line are highlighted; the cell under the cursor is
/// shown focused.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
    winning_line: Option<WinLine>,
    cursor: Option<Position>,
}

impl<'a> BoardView<'a> {
    /// Width the grid needs, separators included.
    pub const WIDTH: u16 = CELL_WIDTH * 3 + 2;
    /// Height the grid needs, separators included.
    pub const HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

    /// View of `board`.
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            winning_line: None,
            cursor: None,
        }
    }

    /// Line to highlight.
    pub fn winning_line(mut self, line: Option<WinLine>) -> Self {
        self.winning_line = line;
        self
    }

    /// Keyboard cursor, if the board has focus.
    pub fn cursor(mut self, cursor: Option<Position>) -> Self {
        self.cursor = cursor;
        self
    }
}

impl StatefulWidget for BoardView<'_> {
    type State = BoardHitMap;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut BoardHitMap) {
        let separator = Style::default().fg(Color::DarkGray);
        let board_area = center_rect(area, Self::WIDTH, Self::HEIGHT);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(CELL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT),
            ])
            .split(board_area);

        for (r, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                ])
                .split(row_area);

            for (c, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
                let Some(pos) = Position::from_row_col(r, c) else {
                    continue;
                };
                let highlighted = self.winning_line.is_some_and(|line| line.contains(pos));
                CellView::new(pos, self.board.get(pos))
                    .highlighted(highlighted)
                    .focused(self.cursor == Some(pos))
                    .render(cell_area, buf);
                state.cells[pos.to_index()] = cell_area;
            }

            for sep in [cols[1], cols[3]] {
                let sep = sep.intersection(buf.area);
                if sep.is_empty() {
                    continue;
                }
                for y in sep.top()..sep.bottom() {
                    buf.set_string(sep.x, y, "│", separator);
                }
            }
        }

        for sep in [rows[1], rows[3]] {
            // Squeezed out entirely on very short terminals.
            let sep = sep.intersection(buf.area);
            if sep.is_empty() {
                continue;
            }
            buf.set_string(sep.x, sep.y, "─".repeat(sep.width as usize), separator);
        }
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(horizontal[1])[1]
}
