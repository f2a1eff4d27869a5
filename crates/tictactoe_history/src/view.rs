//! Renderer-independent view of a [`GameState`].
//!
//! Everything a front end needs to draw a frame: cells with their
//! highlight flag, the status line, the move list in display order, and
//! the label of the order toggle.

use crate::{GameState, GameStatus, Position, Square, StepOrder};
use tracing::instrument;

/// One board cell as displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// Cell position.
    pub position: Position,
    /// Cell content at the current step.
    pub square: Square,
    /// Part of the highlighted winning line.
    pub highlighted: bool,
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntryView {
    /// Step this entry jumps to.
    pub step: usize,
    /// Button text.
    pub description: String,
    /// Rendered as the selected entry.
    pub selected: bool,
}

/// Complete view of a game at its current step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    /// Cells in row-major order.
    pub cells: [CellView; 9],
    /// `"Winner: X"` or `"Next player: O"`.
    pub status: String,
    /// Move list in display order.
    pub moves: Vec<MoveEntryView>,
    /// Text of the order toggle control.
    pub toggle_label: String,
}

impl GameView {
    /// Derives the view from a game state.
    #[instrument(skip(state), fields(step = state.step()))]
    pub fn from_state(state: &GameState) -> Self {
        let board = state.current_board();
        let line = state.winning_line();
        let cells = Position::ALL.map(|position| CellView {
            position,
            square: board.get(position),
            highlighted: line.is_some_and(|line| line.contains(position)),
        });

        let move_history = state.move_history();
        let mut moves: Vec<MoveEntryView> = move_history
            .iter()
            .enumerate()
            .map(|(step, position)| MoveEntryView {
                step,
                description: describe_move(step, *position),
                selected: is_selected(&move_history, state.step(), step),
            })
            .collect();
        if state.step_order() == StepOrder::Descending {
            moves.reverse();
        }

        Self {
            cells,
            status: status_line(state),
            moves,
            toggle_label: format!("Reverse Step Order (Now {})", state.step_order().label()),
        }
    }

    /// The cell at `position`.
    pub fn cell(&self, position: Position) -> &CellView {
        &self.cells[position.to_index()]
    }

    /// The selected move list entries.
    pub fn selected_moves(&self) -> impl Iterator<Item = &MoveEntryView> {
        self.moves.iter().filter(|entry| entry.selected)
    }
}

/// Status line for the board at the current step.
pub fn status_line(state: &GameState) -> String {
    match state.status() {
        GameStatus::Won(player) => format!("Winner: {}", player),
        GameStatus::InProgress | GameStatus::Draw => format!("Next player: {}", state.to_move()),
    }
}

/// Move list text for the entry at `step`.
pub fn describe_move(step: usize, position: Option<Position>) -> String {
    match position {
        Some(position) if step > 0 => format!("Go to move #{} in square {}", step, position),
        _ => "Go to game start".to_string(),
    }
}

/// Whether the move list entry `entry` is shown as selected.
///
/// At the tip, the entry whose square matches the last recorded square is
/// selected (the start entry when nothing has been played). After jumping
/// back, the entry whose square matches the square recorded at `step` is.
pub fn is_selected(move_history: &[Option<Position>], step: usize, entry: usize) -> bool {
    let Some(last) = move_history.last() else {
        return false;
    };
    if step + 1 >= move_history.len() {
        move_history[entry] == *last || move_history.len() < 2
    } else {
        move_history[entry] == move_history[step]
    }
}
