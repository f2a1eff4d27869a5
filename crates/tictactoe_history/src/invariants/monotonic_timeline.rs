//! Monotonic timeline: each snapshot adds exactly one mark to the previous one.

use super::Invariant;
use crate::{GameState, Square};

/// Invariant: squares are never overwritten along the history.
///
/// Every entry equals its predecessor plus one mark at the recorded
/// position, which was empty before.
pub struct MonotonicTimelineInvariant;

impl Invariant<GameState> for MonotonicTimelineInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let Some(pos) = *pair[1].position() else {
                return false;
            };
            let Square::Occupied(player) = after.get(pos) else {
                return false;
            };
            before.is_empty(pos) && before.with(pos, player) == *after
        })
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
