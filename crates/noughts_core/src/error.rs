//! Rejected moves.

use derive_more::{Display, Error};

use crate::Position;

/// Why a placement was refused. The session is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Index past the last cell.
    #[display("No cell at index {}", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// The cell already holds a mark.
    #[display("{} is already taken", _0)]
    Occupied(#[error(not(source))] Position),

    /// The round was won or drawn.
    #[display("Round is over")]
    RoundOver,
}
