//! Tic-tac-toe with a replayable move history.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw detection over a single board
//! - **State**: [`GameState`] records every snapshot, a step pointer for
//!   time travel, and the highlighted winning line
//! - **View**: [`GameView`] derives everything a front end draws
//!
//! # Example
//!
//! ```
//! use tictactoe_history::{GameState, GameView, Position};
//!
//! let mut game = GameState::new();
//! for pos in [Position::TopLeft, Position::Center, Position::TopCenter] {
//!     game.attempt_move(pos);
//! }
//! game.jump_to_step(1).unwrap();
//!
//! let view = GameView::from_state(&game);
//! assert_eq!(view.status, "Next player: O");
//! assert_eq!(game.history().len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod invariants;
mod position;
pub mod rules;
mod state;
mod types;
mod view;

pub use error::{HistoryError, ReplayError};
pub use position::Position;
pub use rules::{WinningLine, check_winner};
pub use state::{
    GameState, HighlightPolicy, HistoryEntry, IgnoreReason, MoveOutcome, StepOrder,
};
pub use types::{Board, GameStatus, Player, Square};
pub use view::{CellView, GameView, MoveEntryView, describe_move, is_selected, status_line};
