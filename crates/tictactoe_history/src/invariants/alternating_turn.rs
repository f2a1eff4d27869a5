//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Player, Square};

/// Invariant: the mark added at step `n` belongs to the player for step `n - 1`,
/// and the player to move matches the parity of the current step.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let marks_alternate = state.history().iter().enumerate().skip(1).all(|(n, entry)| {
            entry.position().is_some_and(|pos| {
                entry.board().get(pos) == Square::Occupied(Player::for_step(n - 1))
            })
        });

        marks_alternate && state.to_move() == Player::for_step(state.step())
    }

    fn description() -> &'static str {
        "Players alternate turns starting with X"
    }
}
