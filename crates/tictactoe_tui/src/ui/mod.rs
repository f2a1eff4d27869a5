//! UI rendering using ratatui.

mod board;
mod layout;
mod moves;

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_history::GameView;

use crate::app::App;

pub use board::render_board;
pub use layout::{BOARD_HEIGHT, BOARD_WIDTH, CELL_HEIGHT, CELL_WIDTH, ScreenLayout};
pub use moves::{render_moves, render_toggle};

/// Help text shown at the bottom of the screen.
pub const HELP: &str =
    "Click or 1-9/Enter: move | ,/.: step | Home/End | S: order | R: restart | Q: quit";

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let layout = ScreenLayout::compute(f.area());
    let view = GameView::from_state(app.game());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.title);

    render_board(f, &layout, &view, app.cursor());

    let status = Paragraph::new(view.status.as_str())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, layout.status);

    render_toggle(f, &layout, &view);
    render_moves(f, &layout, &view);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help);
}
