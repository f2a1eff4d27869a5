//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in priority order: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Three positions forming a completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// Returns the three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Checks whether `pos` is part of the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// Board indices of the line, e.g. `[0, 1, 2]`.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the winning player together with the first complete line in
/// [`LINES`] order, or `None` when no line is complete.
#[instrument]
pub fn check_winner(board: &Board) -> Option<(Player, WinningLine)> {
    for line @ [a, b, c] in LINES {
        let sq = board.get(a);
        if let Square::Occupied(player) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Some((player, WinningLine(line)));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_of(marks: &[(Position, Player)]) -> Board {
        marks
            .iter()
            .fold(Board::new(), |board, (pos, player)| board.with(*pos, *player))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_of(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
        ]);
        let (winner, line) = check_winner(&board).unwrap();
        assert_eq!(winner, Player::X);
        assert_eq!(line.indices(), [0, 1, 2]);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_of(&[
            (Position::TopRight, Player::O),
            (Position::Center, Player::O),
            (Position::BottomLeft, Player::O),
        ]);
        let (winner, line) = check_winner(&board).unwrap();
        assert_eq!(winner, Player::O);
        assert_eq!(line.indices(), [2, 4, 6]);
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board = board_of(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let board = board_of(&line.map(|pos| (pos, Player::O)));
            let (winner, found) = check_winner(&board).unwrap();
            assert_eq!(winner, Player::O);
            assert_eq!(found.positions(), line);
        }
    }

    #[test]
    fn test_row_beats_column_when_both_complete() {
        // Top row and left column, both X (unreachable in play).
        let board = board_of(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::X),
            (Position::BottomLeft, Player::X),
        ]);
        assert_eq!(check_winner(&board).unwrap().1.indices(), [0, 1, 2]);
    }

    #[test]
    fn test_column_beats_diagonal_when_both_complete() {
        let board = board_of(&[
            (Position::TopRight, Player::O),
            (Position::MiddleRight, Player::O),
            (Position::BottomRight, Player::O),
            (Position::TopLeft, Player::O),
            (Position::Center, Player::O),
        ]);
        assert_eq!(check_winner(&board).unwrap().1.indices(), [2, 5, 8]);
    }

    #[test]
    fn test_contains() {
        let line = WinningLine(LINES[6]);
        assert!(line.contains(Position::Center));
        assert!(!line.contains(Position::TopCenter));
    }
}
