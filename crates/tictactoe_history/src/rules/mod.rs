//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. They never look at the
//! history, so any step of a game can be evaluated on its own.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full, status_of};
pub use win::{LINES, WinningLine, check_winner};
