//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::{Board, GameStatus};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.occupied() == board.squares().len()
}

/// A full board with no winner.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

/// Derives the status of a single board snapshot.
#[instrument]
pub fn status_of(board: &Board) -> GameStatus {
    match check_winner(board) {
        Some((player, _)) => GameStatus::Won(player),
        None if is_full(board) => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}
