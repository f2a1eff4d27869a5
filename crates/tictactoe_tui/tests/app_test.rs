//! Tests for event handling and rendering of the terminal UI.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::TestBackend, layout::Rect};
use tictactoe_history::{GameState, GameStatus, Player, Position, Square, StepOrder};
use tictactoe_tui::{
    Action, App,
    ui::{self, ScreenLayout},
};

const AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 90,
    height: 30,
};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn click_cell(app: &mut App, pos: Position) {
    let cell = ScreenLayout::compute(AREA).cells[pos.to_index()];
    app.handle_event(click(cell.x + 1, cell.y + 1), AREA);
}

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(AREA.width, AREA.height)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer().clone();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_clicks_play_a_winning_game() {
    let mut app = App::new(GameState::new());

    for index in [0, 4, 1, 5, 2] {
        click_cell(&mut app, Position::from_index(index).unwrap());
    }

    assert_eq!(app.game().status(), GameStatus::Won(Player::X));
    assert_eq!(app.game().winning_line().map(|l| l.indices()), Some([0, 1, 2]));
    assert!(render(&app).contains("Winner: X"));
}

#[test]
fn test_second_click_on_same_cell_is_ignored() {
    let mut app = App::new(GameState::new());

    click_cell(&mut app, Position::TopLeft);
    click_cell(&mut app, Position::TopLeft);

    assert_eq!(app.game().history().len(), 2);
    assert_eq!(
        app.game().current_board().get(Position::TopLeft),
        Square::Occupied(Player::X)
    );
    assert!(render(&app).contains("Next player: O"));
}

#[test]
fn test_clicking_move_entry_time_travels() {
    let mut app = App::new(GameState::replay(&[Position::Center, Position::TopLeft, Position::BottomRight]).unwrap());
    let layout = ScreenLayout::compute(AREA);
    let row = layout.move_row(1).unwrap();

    app.handle_event(click(row.x + 2, row.y), AREA);

    assert_eq!(app.game().step(), 1);
    assert_eq!(app.game().to_move(), Player::O);
    assert_eq!(app.game().history().len(), 4);
    let screen = render(&app);
    assert!(screen.contains("Next player: O"));
    assert!(screen.contains("Go to move #3 in square 8"));
}

#[test]
fn test_clicking_toggle_reverses_list() {
    let mut app = App::new(GameState::replay(&[Position::Center]).unwrap());
    let toggle = ScreenLayout::compute(AREA).toggle;

    app.handle_event(click(toggle.x + 3, toggle.y + 1), AREA);

    assert_eq!(app.game().step_order(), StepOrder::Descending);
    let screen = render(&app);
    assert!(screen.contains("Reverse Step Order (Now Desc)"));
    let newest = screen.find("Go to move #1 in square 4").unwrap();
    let start = screen.find("Go to game start").unwrap();
    assert!(newest < start);
}

#[test]
fn test_keyboard_play_and_history_navigation() {
    let mut app = App::new(GameState::new());

    app.handle_event(key(KeyCode::Enter), AREA);
    app.handle_event(key(KeyCode::Up), AREA);
    app.handle_event(key(KeyCode::Char(' ')), AREA);
    app.handle_event(key(KeyCode::Char('9')), AREA);
    assert_eq!(app.game().history().len(), 4);
    assert_eq!(app.cursor(), Position::BottomRight);

    app.handle_event(key(KeyCode::Home), AREA);
    assert_eq!(app.game().step(), 0);
    app.handle_event(key(KeyCode::Char('.')), AREA);
    assert_eq!(app.game().step(), 1);
    app.handle_event(key(KeyCode::End), AREA);
    assert_eq!(app.game().step(), 3);
    app.handle_event(key(KeyCode::Char(',')), AREA);
    assert_eq!(app.game().step(), 2);

    app.handle_event(key(KeyCode::Char('1')), AREA);
    assert_eq!(app.game().history().len(), 4);
    assert_eq!(*app.game().history()[3].position(), Some(Position::TopLeft));
}

#[test]
fn test_restart_and_quit() {
    let mut app = App::new(GameState::replay(&[Position::Center]).unwrap());

    app.apply(Action::Restart);
    assert_eq!(app.game().history().len(), 1);
    assert!(!app.should_quit());

    app.handle_event(key(KeyCode::Char('q')), AREA);
    assert!(app.should_quit());
}

#[test]
fn test_render_shows_board_and_controls() {
    let app = App::new(GameState::replay(&[Position::Center]).unwrap());
    let screen = render(&app);

    assert!(screen.contains("Tic Tac Toe"));
    assert!(screen.contains("Go to game start"));
    assert!(screen.contains("Go to move #1 in square 4"));
    assert!(screen.contains("Reverse Step Order (Now Asc)"));

    let center = ScreenLayout::compute(AREA).cells[4];
    let line = screen.lines().nth(usize::from(center.y + 1)).unwrap();
    let cell_text: String = line
        .chars()
        .skip(usize::from(center.x))
        .take(usize::from(center.width))
        .collect();
    assert_eq!(cell_text.trim(), "X");
}
