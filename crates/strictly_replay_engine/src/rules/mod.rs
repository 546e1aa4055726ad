//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](crate::Board). Rules know nothing
//! about history, so the engine and the invariants can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinningLine, calculate_winner};
