//! Win detection logic for tic-tac-toe.

use tracing::instrument;

use crate::{Board, Mark, Position};

/// Three positions that win when filled by one mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinLine([Position; 3]);

impl WinLine {
    /// The positions forming this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Board indices forming this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// True if `pos` is one of the three cells of this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// The eight lines, scanned rows first, then columns, then diagonals.
pub const LINES: [WinLine; 8] = {
    use Position::*;
    [
        // Rows
        WinLine([TopLeft, TopCenter, TopRight]),
        WinLine([MiddleLeft, Center, MiddleRight]),
        WinLine([BottomLeft, BottomCenter, BottomRight]),
        // Columns
        WinLine([TopLeft, MiddleLeft, BottomLeft]),
        WinLine([TopCenter, Center, BottomCenter]),
        WinLine([TopRight, MiddleRight, BottomRight]),
        // Diagonals
        WinLine([TopLeft, Center, BottomRight]),
        WinLine([TopRight, Center, BottomLeft]),
    ]
};

/// A completed line and the mark that completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Win {
    /// Winning mark.
    pub mark: Mark,
    /// The line it filled.
    pub line: WinLine,
}

/// Returns the first line in [`LINES`] uniformly filled by one mark.
///
/// Only one mark can complete a line before play stops, so the first match
/// is the only one that matters.
#[instrument(skip(board))]
pub fn evaluate_winner(board: &Board) -> Option<Win> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.positions();
        let mark = board.get(a).mark()?;
        (board.get(b).mark() == Some(mark) && board.get(c).mark() == Some(mark)).then_some(Win {
            mark,
            line: *line,
        })
    })
}
