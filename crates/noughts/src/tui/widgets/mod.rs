//! Widgets composing the game screen.

mod board;
mod button;
mod cell;
mod name_input;

pub use board::{BoardHitMap, BoardView};
pub use button::Button;
pub use cell::CellView;
pub use name_input::{NameInput, visible_tail};
