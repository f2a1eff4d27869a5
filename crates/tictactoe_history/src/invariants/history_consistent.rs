//! History consistency: the step pointer and the start entry are sound.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: the history starts from an empty board and `step` points into it.
///
/// Also checks that the parallel move list has one entry per snapshot and
/// that entry `k` carries exactly `k` marks.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        let Some(first) = history.first() else {
            return false;
        };

        *first.board() == Board::new()
            && first.position().is_none()
            && history[1..].iter().all(|entry| entry.position().is_some())
            && history
                .iter()
                .enumerate()
                .all(|(k, entry)| entry.board().occupied() == k)
            && state.move_history().len() == history.len()
            && state.step() < history.len()
    }

    fn description() -> &'static str {
        "History starts empty and the step pointer is in range"
    }
}
