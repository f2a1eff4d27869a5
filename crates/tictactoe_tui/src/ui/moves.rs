//! Move list and order toggle rendering.

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_history::GameView;

use super::layout::ScreenLayout;

/// Renders the move list, one clickable row per entry in display order.
pub fn render_moves(f: &mut Frame, layout: &ScreenLayout, view: &GameView) {
    let block = Block::default().borders(Borders::ALL).title("Moves");
    f.render_widget(block, layout.moves);

    for (i, entry, row) in layout.visible_moves(view) {
        let style = if entry.selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let text = format!("{:>2}. {}", i + 1, entry.description);
        f.render_widget(Paragraph::new(text).style(style), row);
    }
}

/// Renders the order toggle as a bordered button.
pub fn render_toggle(f: &mut Frame, layout: &ScreenLayout, view: &GameView) {
    let button = Paragraph::new(view.toggle_label.as_str())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, layout.toggle);
}
