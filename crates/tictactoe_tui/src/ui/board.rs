//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_history::{CellView, GameView, Player, Position, Square};

use super::layout::{CELL_HEIGHT, CELL_WIDTH, ScreenLayout, inner};

/// Renders the board block, its separators, and the nine cells.
pub fn render_board(f: &mut Frame, layout: &ScreenLayout, view: &GameView, cursor: Position) {
    let block = Block::default().borders(Borders::ALL).title("Board");
    f.render_widget(block, layout.board);

    render_separators(f, inner(layout.board));

    for cell in &view.cells {
        render_cell(f, layout.cells[cell.position.to_index()], cell, cell.position == cursor);
    }
}

fn render_cell(f: &mut Frame, area: Rect, cell: &CellView, has_cursor: bool) {
    let (text, mut style) = match cell.square {
        Square::Empty => (
            format!("{}", cell.position.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if has_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let mut lines = vec![Line::from(""); usize::from(CELL_HEIGHT / 2)];
    lines.push(Line::from(Span::styled(text, style)));

    let paragraph = Paragraph::new(lines)
        .style(if cell.highlighted {
            Style::default().bg(Color::Yellow)
        } else {
            Style::default()
        })
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separators(f: &mut Frame, board: Rect) {
    let style = Style::default().fg(Color::DarkGray);

    for i in 1..3u16 {
        let y = board.y + i * (CELL_HEIGHT + 1) - 1;
        if y < board.y + board.height {
            let line = Rect::new(board.x, y, board.width, 1);
            f.render_widget(
                Paragraph::new("─".repeat(usize::from(board.width))).style(style),
                line,
            );
        }

        let x = board.x + i * (CELL_WIDTH + 1) - 1;
        if x < board.x + board.width {
            for row in 0..3u16 {
                let y = board.y + row * (CELL_HEIGHT + 1);
                let height = CELL_HEIGHT.min((board.y + board.height).saturating_sub(y));
                let column = Rect::new(x, y, 1, height);
                f.render_widget(Paragraph::new("│\n│\n│").style(style), column);
            }
        }
    }
}
