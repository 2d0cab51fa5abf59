//! Draw and game-over detection for tic-tac-toe.

use tracing::instrument;

use super::win::evaluate_winner;
use crate::Board;

/// Checks if every cell is marked.
///
/// A full board is only a draw when no line was completed.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}

/// True if the board has a winner or no empty cell left.
#[instrument(skip(board))]
pub fn is_game_over(board: &Board) -> bool {
    evaluate_winner(board).is_some() || is_full(board)
}
