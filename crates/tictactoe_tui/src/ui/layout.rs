//! Screen regions shared by rendering and mouse hit-testing.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use tictactoe_history::{GameView, MoveEntryView, Position};

use crate::input::Action;

/// Width of one board cell in columns.
pub const CELL_WIDTH: u16 = 11;
/// Height of one board cell in rows.
pub const CELL_HEIGHT: u16 = 3;
/// Board block width including separators and border.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2 + 2;
/// Board block height including separators and border.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2 + 2;

/// Every region of the screen for a given terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Bordered board block.
    pub board: Rect,
    /// Board cells in row-major order.
    pub cells: [Rect; 9],
    /// Status line block.
    pub status: Rect,
    /// Order toggle button.
    pub toggle: Rect,
    /// Bordered move list block.
    pub moves: Rect,
    /// Key help line.
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits `area` into screen regions.
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(BOARD_HEIGHT + 6),
                Constraint::Length(3), // Help
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(BOARD_WIDTH + 2), Constraint::Min(24)])
            .split(rows[1]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(BOARD_HEIGHT),
                Constraint::Length(3), // Status
                Constraint::Length(3), // Toggle
                Constraint::Min(0),
            ])
            .split(body[0]);

        let board = Rect {
            width: left[0].width.min(BOARD_WIDTH),
            ..left[0]
        };
        let toggle = Rect {
            width: left[2].width.min(BOARD_WIDTH),
            ..left[2]
        };
        let status = Rect {
            width: left[1].width.min(BOARD_WIDTH),
            ..left[1]
        };

        Self {
            title: rows[0],
            board,
            cells: cell_rects(board),
            status,
            toggle,
            moves: body[1],
            help: rows[2],
        }
    }

    /// The region of the `slot`-th visible row of the move list.
    pub fn move_row(&self, slot: usize) -> Option<Rect> {
        let inner = inner(self.moves);
        let offset = u16::try_from(slot).ok()?;
        (offset < inner.height).then(|| Rect::new(inner.x, inner.y + offset, inner.width, 1))
    }

    /// Display index of the first visible move list entry.
    ///
    /// When the list does not fit, the window scrolls just far enough to
    /// keep the first selected entry on screen.
    pub fn move_scroll(&self, view: &GameView) -> usize {
        let visible = usize::from(inner(self.moves).height);
        let selected = view.moves.iter().position(|entry| entry.selected).unwrap_or(0);
        (selected + 1).saturating_sub(visible)
    }

    /// Visible move list entries paired with their display index and row.
    pub fn visible_moves<'a>(
        &self,
        view: &'a GameView,
    ) -> impl Iterator<Item = (usize, &'a MoveEntryView, Rect)> {
        let scroll = self.move_scroll(view);
        let layout = *self;
        view.moves
            .iter()
            .enumerate()
            .skip(scroll)
            .map_while(move |(i, entry)| layout.move_row(i - scroll).map(|row| (i, entry, row)))
    }

    /// Resolves a mouse click at (`column`, `row`) to an action.
    pub fn hit_test(&self, column: u16, row: u16, view: &GameView) -> Option<Action> {
        if let Some(pos) = Position::ALL
            .iter()
            .copied()
            .find(|pos| contains(self.cells[pos.to_index()], column, row))
        {
            return Some(Action::Play(pos));
        }

        if contains(self.toggle, column, row) {
            return Some(Action::ToggleOrder);
        }

        self.visible_moves(view)
            .find(|(_, _, rect)| contains(*rect, column, row))
            .map(|(_, entry, _)| Action::JumpTo(entry.step))
    }
}

/// Area inside a one-cell border.
pub fn inner(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: rect.y.saturating_add(1),
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    }
}

fn cell_rects(board: Rect) -> [Rect; 9] {
    let inner = inner(board);
    Position::ALL.map(|pos| {
        let col = pos.col() as u16;
        let row = pos.row() as u16;
        Rect::new(
            inner.x + col * (CELL_WIDTH + 1),
            inner.y + row * (CELL_HEIGHT + 1),
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(inner)
    })
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_history::GameState;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 30,
    };

    #[test]
    fn test_cells_are_disjoint_and_inside_board() {
        let layout = ScreenLayout::compute(AREA);
        for (i, a) in layout.cells.iter().enumerate() {
            assert_eq!((a.width, a.height), (CELL_WIDTH, CELL_HEIGHT));
            assert_eq!(a.intersection(layout.board), *a);
            for b in &layout.cells[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn test_click_on_cell_plays_it() {
        let layout = ScreenLayout::compute(AREA);
        let view = GameView::from_state(&GameState::new());
        let center = layout.cells[4];

        assert_eq!(
            layout.hit_test(center.x + 1, center.y + 1, &view),
            Some(Action::Play(Position::Center))
        );
    }

    #[test]
    fn test_click_on_separator_does_nothing() {
        let layout = ScreenLayout::compute(AREA);
        let view = GameView::from_state(&GameState::new());
        let first = layout.cells[0];

        assert_eq!(layout.hit_test(first.x + CELL_WIDTH, first.y, &view), None);
    }

    #[test]
    fn test_click_on_toggle() {
        let layout = ScreenLayout::compute(AREA);
        let view = GameView::from_state(&GameState::new());

        assert_eq!(
            layout.hit_test(layout.toggle.x + 2, layout.toggle.y + 1, &view),
            Some(Action::ToggleOrder)
        );
    }

    #[test]
    fn test_click_on_move_entry_uses_display_order() {
        let mut game = GameState::replay(&[Position::Center, Position::TopLeft]).unwrap();
        game.toggle_step_order();
        let view = GameView::from_state(&game);
        let layout = ScreenLayout::compute(AREA);

        let top = layout.move_row(0).unwrap();
        assert_eq!(layout.hit_test(top.x, top.y, &view), Some(Action::JumpTo(2)));

        let bottom = layout.move_row(2).unwrap();
        assert_eq!(layout.hit_test(bottom.x + 3, bottom.y, &view), Some(Action::JumpTo(0)));

        let past_end = layout.move_row(3).unwrap();
        assert_eq!(layout.hit_test(past_end.x, past_end.y, &view), None);
    }

    #[test]
    fn test_short_move_list_scrolls_to_selected_entry() {
        let mut game = GameState::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::BottomRight,
            Position::TopRight,
            Position::BottomLeft,
            Position::MiddleLeft,
        ])
        .unwrap();
        let mut layout = ScreenLayout::compute(AREA);
        layout.moves.height = 5;

        let view = GameView::from_state(&game);
        assert_eq!(layout.move_scroll(&view), 4);
        let shown: Vec<usize> = layout.visible_moves(&view).map(|(i, _, _)| i).collect();
        assert_eq!(shown, vec![4, 5, 6]);
        let last = layout.move_row(2).unwrap();
        assert_eq!(layout.hit_test(last.x, last.y, &view), Some(Action::JumpTo(6)));
        let first = layout.move_row(0).unwrap();
        assert_eq!(layout.hit_test(first.x, first.y, &view), Some(Action::JumpTo(4)));

        game.jump_to_step(1).unwrap();
        let view = GameView::from_state(&game);
        assert_eq!(layout.move_scroll(&view), 0);
        assert_eq!(layout.hit_test(first.x, first.y, &view), Some(Action::JumpTo(0)));
    }
}
