//! Terminal front end for time-travel tic-tac-toe.
//!
//! # Architecture
//!
//! - **App**: owns the game session and applies [`Action`]s to it
//! - **Input**: maps keys to actions; mouse clicks go through
//!   [`ui::ScreenLayout::hit_test`]
//! - **UI**: stateless ratatui rendering of a [`tictactoe_history::GameView`]
//! - **Config**: optional TOML settings and the command line

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
pub mod ui;

pub use app::App;
pub use cli::{Cli, MoveList};
pub use config::{ConfigError, Settings};
pub use input::{Action, Direction, action_for_key, move_cursor};
