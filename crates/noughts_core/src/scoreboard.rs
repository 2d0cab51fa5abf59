//! Round-over-round tally.

use derive_getters::Getters;
use tracing::{debug, instrument};

use crate::{Mark, Outcome};

/// Wins per mark and draws across the rounds of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters)]
pub struct Scoreboard {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Scoreboard {
    /// Empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Number of rounds recorded.
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    /// Records a finished round. `InProgress` records nothing.
    #[instrument(skip(self))]
    pub(crate) fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Won { mark: Mark::X, .. } => self.x_wins += 1,
            Outcome::Won { mark: Mark::O, .. } => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => return,
        }
        debug!(
            x_wins = self.x_wins,
            o_wins = self.o_wins,
            draws = self.draws,
            "Scoreboard updated"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::LINES;

    #[test]
    fn test_record() {
        let mut scores = Scoreboard::new();
        scores.record(&Outcome::Won {
            mark: Mark::O,
            line: LINES[0],
        });
        scores.record(&Outcome::Draw);
        scores.record(&Outcome::InProgress);
        assert_eq!(scores.wins(Mark::O), 1);
        assert_eq!(scores.wins(Mark::X), 0);
        assert_eq!(*scores.draws(), 1);
        assert_eq!(scores.total(), 2);
    }
}
