//! Application state and event handling.

use crossterm::event::{self, Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::Backend, layout::Rect};
use tictactoe_history::{GameState, GameStatus, GameView, MoveOutcome, Position};
use tokio::time::{Duration, sleep};
use tracing::{debug, info, instrument, warn};

use crate::input::{Action, action_for_key, move_cursor};
use crate::ui::{self, ScreenLayout};

/// Main application state.
///
/// Owns the single [`GameState`] of the session and mutates it only
/// through its transition operations.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates an application around an existing game.
    #[instrument(skip(game), fields(step = game.step()))]
    pub fn new(game: GameState) -> Self {
        Self {
            game,
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// The current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Square under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies an action to the game.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Play(pos) => self.play(pos),
            Action::PlayAtCursor => self.play(self.cursor),
            Action::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Action::JumpTo(step) => {
                if let Err(e) = self.game.jump_to_step(step) {
                    warn!(error = %e, "Ignoring jump");
                }
            }
            Action::StepBack => {
                self.game.step_back();
            }
            Action::StepForward => {
                self.game.step_forward();
            }
            Action::JumpToLatest => {
                self.game.jump_to_latest();
            }
            Action::ToggleOrder => self.game.toggle_step_order(),
            Action::Restart => {
                info!("Restarting game");
                self.game.restart();
            }
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn play(&mut self, pos: Position) {
        self.cursor = pos;
        match self.game.attempt_move(pos) {
            MoveOutcome::Accepted { player, status } => {
                info!(%player, square = %pos, %status, "Move played");
                if status != GameStatus::InProgress {
                    info!(board = %self.game.current_board().display(), "Game finished");
                }
            }
            MoveOutcome::Ignored(reason) => {
                debug!(%reason, square = %pos, "Move ignored");
            }
        }
    }

    /// Translates a terminal event into an action and applies it.
    ///
    /// `area` is the size of the last drawn frame; mouse clicks are
    /// resolved against its layout.
    #[instrument(skip(self, event))]
    pub fn handle_event(&mut self, event: Event, area: Rect) {
        let action = match event {
            Event::Key(key) => action_for_key(key),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                let view = GameView::from_state(&self.game);
                ScreenLayout::compute(area).hit_test(column, row, &view)
            }
            _ => None,
        };

        if let Some(action) = action {
            self.apply(action);
        }
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting event loop");
        let mut area = Rect::default();

        while !self.should_quit {
            terminal.draw(|f| {
                area = f.area();
                ui::draw(f, &*self);
            })?;

            // Poll with a short timeout to keep the loop responsive.
            if event::poll(Duration::from_millis(100))? {
                let event = event::read()?;
                self.handle_event(event, area);
            }

            sleep(Duration::from_millis(10)).await;
        }

        Ok(())
    }
}
