//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! the engine so they can be checked on any board, not just the live one.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WinLine, check_win, find_win, winner};
