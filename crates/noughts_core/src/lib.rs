//! Noughts core - pure tic-tac-toe logic.
//!
//! # Architecture
//!
//! - **Rules**: win and draw evaluation over a 9-cell board
//! - **Outcome**: in progress, won (with the line) or drawn
//! - **Session**: board, turn, round counter, scoreboard and names, with
//!   the transitions that change them
//!
//! # Example
//!
//! ```
//! use noughts_core::{Mark, Session};
//!
//! let mut session = Session::default();
//! for index in [0, 4, 1, 5, 2] {
//!     session.click(index);
//! }
//! assert_eq!(session.outcome().winner(), Some(Mark::X));
//! assert_eq!(session.scores().wins(Mark::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod names;
mod outcome;
mod position;
pub mod rules;
mod scoreboard;
mod session;
mod types;

pub use error::MoveError;
pub use names::PlayerNames;
pub use outcome::Outcome;
pub use position::Position;
pub use rules::{Win, WinLine};
pub use scoreboard::Scoreboard;
pub use session::Session;
pub use types::{Board, Cell, Mark};
