//! Core domain types for tic-tac-toe.

use derive_more::Display;
use tracing::instrument;

use crate::position::Position;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Mark {
    /// Mark X (starts the first round).
    #[display("X")]
    X,
    /// Mark O.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Mark that opens the given round.
    ///
    /// Round 1 and every odd round start with X, even rounds with O.
    #[instrument]
    pub fn starting(round: u32) -> Self {
        if round % 2 == 1 { Mark::X } else { Mark::O }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Cell holds a player's mark.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// True if no mark has been placed here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// 3x3 board, row-major.
///
/// Cells only ever go from empty to marked. Clearing the board means
/// building a new one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at a position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// True if the cell at `pos` is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Marks an empty cell. Returns false and leaves the board alone if the
    /// cell is already taken.
    pub(crate) fn mark(&mut self, pos: Position, mark: Mark) -> bool {
        let cell = &mut self.cells[pos.to_index()];
        if !cell.is_empty() {
            return false;
        }
        *cell = Cell::Marked(mark);
        true
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }
}

#[cfg(test)]
impl Board {
    /// Builds a board from a row-major picture: `X`, `O`, anything else empty.
    pub(crate) fn from_rows(rows: [&str; 3]) -> Self {
        let mut board = Board::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().take(3).enumerate() {
                let cell = match ch {
                    'X' => Cell::Marked(Mark::X),
                    'O' => Cell::Marked(Mark::O),
                    _ => Cell::Empty,
                };
                board.cells[r * 3 + c] = cell;
            }
        }
        board
    }
}
