//! Invariants of a [`GameState`](crate::GameState).
//!
//! Each invariant is a logical property of the whole history. They are
//! checked after every accepted move in debug builds and are testable on
//! their own.

pub mod alternating_turn;
pub mod history_consistent;
pub mod monotonic_timeline;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_timeline::MonotonicTimelineInvariant;

use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: &'static str,
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<InvariantViolation> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation { description })
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All game state invariants as a composable set.
pub type GameStateInvariants = (
    HistoryConsistentInvariant,
    MonotonicTimelineInvariant,
    AlternatingTurnInvariant,
);

/// Logs and, in debug builds, panics on any violated invariant.
pub(crate) fn assert_invariants(state: &crate::GameState) {
    if let Err(violations) = GameStateInvariants::check_all(state) {
        for violation in &violations {
            warn!(%violation, "Game state invariant violated");
        }
        debug_assert!(violations.is_empty(), "invariants violated: {violations:?}");
    }
}
