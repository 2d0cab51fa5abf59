//! Outcome of a round, derived from the board.

use tracing::instrument;

use crate::rules::{WinLine, evaluate_winner, is_full};
use crate::{Board, Mark};

/// Where a round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    /// Moves are still accepted.
    #[default]
    InProgress,
    /// A mark filled a line.
    Won {
        /// Winning mark.
        mark: Mark,
        /// The filled line.
        line: WinLine,
    },
    /// Board full, no line.
    Draw,
}

impl Outcome {
    /// Classifies a board. A completed line wins even on a full board.
    #[instrument(skip(board))]
    pub fn evaluate(board: &Board) -> Self {
        if let Some(win) = evaluate_winner(board) {
            return Outcome::Won {
                mark: win.mark,
                line: win.line,
            };
        }
        if is_full(board) {
            return Outcome::Draw;
        }
        Outcome::InProgress
    }

    /// True once the round has been won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Winning line, if any.
    pub fn winning_line(&self) -> Option<WinLine> {
        match self {
            Outcome::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}
