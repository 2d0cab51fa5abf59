//! Round state machine and session bookkeeping.
//!
//! A [`Session`] owns everything that changes while two people play:
//! the board, whose turn it is, the round counter, the scoreboard and the
//! player names. Every mutation goes through a `&mut self` method and the
//! outcome is recomputed inside the same call, so there is no derived state
//! to fall out of sync.
//!
//! Crediting the scoreboard is the entry action of `Won`/`Draw`: the one
//! placement that ends a round records it, and nothing else ever does.

use tracing::{debug, info, instrument};

use crate::rules::WinLine;
use crate::{Board, Mark, MoveError, Outcome, PlayerNames, Position, Scoreboard};

/// All mutable state of a two-player session.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    to_move: Mark,
    outcome: Outcome,
    history: Vec<Position>,
    round: u32,
    scores: Scoreboard,
    names: PlayerNames,
}

impl Session {
    /// Starts round 1 with X to move and a zeroed scoreboard.
    #[instrument(skip(names))]
    pub fn new(names: PlayerNames) -> Self {
        info!(x = %names.get(Mark::X), o = %names.get(Mark::O), "Starting session");
        Self {
            board: Board::new(),
            to_move: Mark::starting(1),
            outcome: Outcome::InProgress,
            history: Vec::new(),
            round: 1,
            scores: Scoreboard::new(),
            names,
        }
    }

    /// Places the current mark at `pos`.
    ///
    /// On success returns the outcome after the move. The turn flips only
    /// while the round continues. The placement that wins or fills the board
    /// records the round on the scoreboard.
    ///
    /// # Errors
    ///
    /// [`MoveError::RoundOver`] once the round is won or drawn,
    /// [`MoveError::Occupied`] if the cell is taken. The session is left
    /// untouched in both cases.
    #[instrument(skip(self), fields(round = self.round, mark = %self.to_move))]
    pub fn place(&mut self, pos: Position) -> Result<Outcome, MoveError> {
        if self.outcome.is_over() {
            return Err(MoveError::RoundOver);
        }
        if !self.board.mark(pos, self.to_move) {
            return Err(MoveError::Occupied(pos));
        }
        self.history.push(pos);

        self.outcome = Outcome::evaluate(&self.board);
        match self.outcome {
            Outcome::InProgress => {
                self.to_move = self.to_move.opponent();
                debug!(next = %self.to_move, "Move accepted");
            }
            Outcome::Won { mark, line } => {
                self.scores.record(&self.outcome);
                info!(%mark, line = ?line.indices(), "Round won");
            }
            Outcome::Draw => {
                self.scores.record(&self.outcome);
                info!("Round drawn");
            }
        }
        Ok(self.outcome)
    }

    /// Places the current mark at a board index.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfRange`] for indices past 8, otherwise as
    /// [`Session::place`].
    pub fn place_index(&mut self, index: usize) -> Result<Outcome, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        self.place(pos)
    }

    /// Click intent from the board: tries the move and reports whether it
    /// was accepted. Rejections are silent apart from a debug event.
    pub fn click(&mut self, index: usize) -> bool {
        match self.place_index(index) {
            Ok(_) => true,
            Err(e) => {
                debug!(index, reason = %e, "Click ignored");
                false
            }
        }
    }

    /// Clears the board for the next round. Scores and names are kept and
    /// the opening mark alternates.
    ///
    /// A round abandoned before it ended is not recorded.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn new_round(&mut self) {
        self.round += 1;
        self.clear_board();
        info!(round = self.round, starts = %self.to_move, "New round");
    }

    /// Back to round 1 with zeroed scores. Names are kept.
    #[instrument(skip(self))]
    pub fn full_reset(&mut self) {
        self.round = 1;
        self.scores = Scoreboard::new();
        self.clear_board();
        info!("Session reset");
    }

    fn clear_board(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.outcome = Outcome::InProgress;
        self.to_move = Mark::starting(self.round);
    }

    /// Status line for the current state.
    pub fn status_text(&self) -> String {
        match self.outcome {
            Outcome::Won { mark, .. } => format!("{} ({}) wins!", self.names.get(mark), mark),
            Outcome::Draw => "It's a draw.".to_string(),
            Outcome::InProgress => {
                format!("Turn: {} ({})", self.names.get(self.to_move), self.to_move)
            }
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark placed by the next accepted move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Current outcome of the round.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Line to highlight, if the round was won.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.outcome.winning_line()
    }

    /// Positions played this round, oldest first.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Round number, starting at 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// The scoreboard.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Player names.
    pub fn names(&self) -> &PlayerNames {
        &self.names
    }

    /// Player names, for in-place editing.
    pub fn names_mut(&mut self) -> &mut PlayerNames {
        &mut self.names
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(PlayerNames::default())
    }
}
