//! Game state with a replayable move history.
//!
//! [`GameState`] keeps every board snapshot of the current line of play.
//! The step pointer selects which snapshot is displayed and which one the
//! next move branches from. Jumping never truncates the history; the next
//! accepted move discards whatever lay beyond the step pointer.

use crate::error::{HistoryError, ReplayError};
use crate::invariants::assert_invariants;
use crate::rules::{WinningLine, check_winner, status_of};
use crate::{Board, GameStatus, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A board snapshot and the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Board after the move.
    pub(crate) board: Board,
    /// Square played to reach this board; `None` for the start entry.
    pub(crate) position: Option<Position>,
}

impl HistoryEntry {
    /// The empty board every game starts from.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            position: None,
        }
    }
}

/// Display order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl StepOrder {
    /// Returns the opposite order.
    pub fn toggle(self) -> Self {
        match self {
            StepOrder::Ascending => StepOrder::Descending,
            StepOrder::Descending => StepOrder::Ascending,
        }
    }

    /// Short label used by the toggle control.
    pub fn label(self) -> &'static str {
        match self {
            StepOrder::Ascending => "Asc",
            StepOrder::Descending => "Desc",
        }
    }
}

/// When the highlighted winning line is updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightPolicy {
    /// The line always matches the board at the current step.
    #[default]
    Recompute,
    /// The line is set by the winning move and kept through later jumps
    /// and moves, even when the displayed board no longer shows it.
    Sticky,
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoreReason {
    /// The board at the current step already has a winner.
    #[display("the game is already won")]
    GameOver,
    /// The targeted square is taken.
    #[display("square {} is already occupied", _0)]
    SquareOccupied(Position),
}

/// Result of [`GameState::attempt_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was recorded.
    Accepted {
        /// Player who moved.
        player: Player,
        /// Status of the new board.
        status: GameStatus,
    },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    /// Returns true if the move was recorded.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted { .. })
    }
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) step: usize,
    pub(crate) to_move: Player,
    winning_line: Option<WinningLine>,
    step_order: StepOrder,
    highlight: HighlightPolicy,
}

impl GameState {
    /// Creates a new game with default settings.
    #[instrument]
    pub fn new() -> Self {
        Self::with_settings(HighlightPolicy::default(), StepOrder::default())
    }

    /// Creates a new game with the given highlight policy and list order.
    #[instrument]
    pub fn with_settings(highlight: HighlightPolicy, step_order: StepOrder) -> Self {
        Self {
            history: vec![HistoryEntry::start()],
            step: 0,
            to_move: Player::X,
            winning_line: None,
            step_order,
            highlight,
        }
    }

    /// Builds a game by playing `moves` in order from an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError`] for the first move that would be ignored.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Result<Self, ReplayError> {
        let mut state = Self::new();
        state.apply_moves(moves)?;
        Ok(state)
    }

    /// Plays `moves` in order from the current step.
    ///
    /// Moves before the rejected one stay applied.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError`] for the first move that would be ignored.
    #[instrument(skip(self))]
    pub fn apply_moves(&mut self, moves: &[Position]) -> Result<(), ReplayError> {
        for (i, pos) in moves.iter().enumerate() {
            if let MoveOutcome::Ignored(reason) = self.attempt_move(*pos) {
                return Err(ReplayError {
                    number: i + 1,
                    position: *pos,
                    reason,
                });
            }
        }
        Ok(())
    }

    /// Every recorded snapshot, entry 0 being the empty board.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Square played at each step, `None` for the start entry.
    ///
    /// Always the same length as [`GameState::history`].
    pub fn move_history(&self) -> Vec<Option<Position>> {
        self.history.iter().map(|entry| entry.position).collect()
    }

    /// Index of the displayed snapshot.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Player who makes the next move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Highlighted winning line, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// Display order of the move list.
    pub fn step_order(&self) -> StepOrder {
        self.step_order
    }

    /// Highlight policy this game was created with.
    pub fn highlight(&self) -> HighlightPolicy {
        self.highlight
    }

    /// The entry at the current step.
    pub fn current(&self) -> &HistoryEntry {
        &self.history[self.step]
    }

    /// The board at the current step.
    pub fn current_board(&self) -> &Board {
        &self.current().board
    }

    /// Status of the board at the current step.
    pub fn status(&self) -> GameStatus {
        status_of(self.current_board())
    }

    /// True when the current step is the last recorded one.
    pub fn is_at_tip(&self) -> bool {
        self.step + 1 == self.history.len()
    }

    /// Places the next player's mark at `pos`, branching from the current step.
    ///
    /// The move is ignored, leaving the state untouched, when the current
    /// board already has a winner or `pos` is occupied. Otherwise every entry
    /// after the current step is discarded before the new one is appended.
    #[instrument(skip(self), fields(step = self.step, player = %self.to_move))]
    pub fn attempt_move(&mut self, pos: Position) -> MoveOutcome {
        let current = *self.current_board();

        if check_winner(&current).is_some() {
            debug!(?pos, "Ignoring move, game already won");
            return MoveOutcome::Ignored(IgnoreReason::GameOver);
        }
        if !current.is_empty(pos) {
            debug!(?pos, "Ignoring move, square occupied");
            return MoveOutcome::Ignored(IgnoreReason::SquareOccupied(pos));
        }

        let player = self.to_move;
        let entry = HistoryEntry {
            board: current.with(pos, player),
            position: Some(pos),
        };
        let history: Vec<HistoryEntry> = self.history[..=self.step]
            .iter()
            .copied()
            .chain(std::iter::once(entry))
            .collect();
        let discarded = self.history.len() - (self.step + 1);

        self.history = history;
        self.step = self.history.len() - 1;
        self.to_move = player.opponent();

        let winner = check_winner(&entry.board);
        match self.highlight {
            HighlightPolicy::Recompute => self.winning_line = winner.map(|(_, line)| line),
            HighlightPolicy::Sticky => {
                if let Some((_, line)) = winner {
                    self.winning_line = Some(line);
                }
            }
        }

        let status = status_of(&entry.board);
        debug!(?pos, discarded, %status, "Move accepted");
        assert_invariants(self);

        MoveOutcome::Accepted { player, status }
    }

    /// Displays the snapshot at `step` without touching the history.
    ///
    /// The next player is derived from the step's parity.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::StepOutOfRange`] if `step` was never recorded.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to_step(&mut self, step: usize) -> Result<(), HistoryError> {
        if step >= self.history.len() {
            return Err(HistoryError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }

        self.step = step;
        self.to_move = Player::for_step(step);
        if self.highlight == HighlightPolicy::Recompute {
            self.winning_line = check_winner(self.current_board()).map(|(_, line)| line);
        }
        debug!(to = step, "Jumped to step");
        Ok(())
    }

    /// Jumps one step back. Returns false at the start.
    #[instrument(skip(self))]
    pub fn step_back(&mut self) -> bool {
        match self.step.checked_sub(1) {
            Some(step) => self.jump_to_step(step).is_ok(),
            None => false,
        }
    }

    /// Jumps one step forward. Returns false at the tip.
    #[instrument(skip(self))]
    pub fn step_forward(&mut self) -> bool {
        self.jump_to_step(self.step + 1).is_ok()
    }

    /// Jumps to the last recorded step. Returns false if there is none.
    #[instrument(skip(self))]
    pub fn jump_to_latest(&mut self) -> bool {
        self.history
            .len()
            .checked_sub(1)
            .is_some_and(|last| self.jump_to_step(last).is_ok())
    }

    /// Flips the display order of the move list.
    #[instrument(skip(self))]
    pub fn toggle_step_order(&mut self) {
        self.step_order = self.step_order.toggle();
        debug!(order = ?self.step_order, "Step order toggled");
    }

    /// Starts over with an empty board, keeping the display settings.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        *self = Self::with_settings(self.highlight, self.step_order);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
