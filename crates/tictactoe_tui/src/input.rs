//! Keyboard mapping and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tictactoe_history::Position;

/// A user intent, independent of how it was entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play the next mark at a square.
    Play(Position),
    /// Play the next mark at the cursor.
    PlayAtCursor,
    /// Move the keyboard cursor.
    MoveCursor(Direction),
    /// Display the snapshot at a step.
    JumpTo(usize),
    /// Display the previous snapshot.
    StepBack,
    /// Display the next snapshot.
    StepForward,
    /// Display the last recorded snapshot.
    JumpToLatest,
    /// Flip the move list order.
    ToggleOrder,
    /// Start a new game.
    Restart,
    /// Leave the application.
    Quit,
}

/// Cursor direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards row 2.
    Down,
    /// Towards column 0.
    Left,
    /// Towards column 2.
    Right,
}

/// Maps a key press to an action.
///
/// Release and repeat events map to nothing.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('s') => Some(Action::ToggleOrder),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Action::Play),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayAtCursor),
        KeyCode::Up => Some(Action::MoveCursor(Direction::Up)),
        KeyCode::Down => Some(Action::MoveCursor(Direction::Down)),
        KeyCode::Left => Some(Action::MoveCursor(Direction::Left)),
        KeyCode::Right => Some(Action::MoveCursor(Direction::Right)),
        KeyCode::Char(',') | KeyCode::PageUp => Some(Action::StepBack),
        KeyCode::Char('.') | KeyCode::PageDown => Some(Action::StepForward),
        KeyCode::Home => Some(Action::JumpTo(0)),
        KeyCode::End => Some(Action::JumpToLatest),
        _ => None,
    }
}

/// Moves the cursor one square, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}
