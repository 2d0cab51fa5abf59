//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here mutates
//! state; the session calls them right after each placement.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_game_over};
pub use win::{LINES, Win, WinLine, evaluate_winner};
