//! Error types for history navigation and replay.

use crate::{IgnoreReason, Position};
use derive_more::{Display, Error};

/// Error returned when navigating the move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    /// The requested step does not exist.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of entries in the history.
        len: usize,
    },
}

/// Error returned when a scripted move sequence cannot be replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Move #{} at square {} was rejected: {}", number, position, reason)]
pub struct ReplayError {
    /// 1-based move number within the sequence.
    pub number: usize,
    /// Square that was played.
    pub position: Position,
    /// Why the move was ignored.
    pub reason: IgnoreReason,
}
