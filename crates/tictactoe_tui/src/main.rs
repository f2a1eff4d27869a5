//! Time-travel tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io, path::Path};
use tictactoe_history::GameState;
use tictactoe_tui::{App, Cli, Settings};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut settings = Settings::load_or_default(&cli.config)?;
    if let Some(log_file) = cli.log_file.clone() {
        settings = settings.with_log_file(log_file);
    }

    initialize_tracing(settings.log_file())?;
    info!(config = %cli.config.display(), "Starting tic-tac-toe");

    let game = initial_game(&settings, &cli)?;
    let mut app = App::new(game);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "Event loop error");
        return Err(err);
    }

    if cli.transcript {
        println!("{}", serde_json::to_string_pretty(app.game().history())?);
    }

    info!(moves = app.game().history().len() - 1, "Exiting");
    Ok(())
}

/// Builds the starting game, playing any squares given with `--moves`.
#[instrument(skip_all)]
fn initial_game(settings: &Settings, cli: &Cli) -> Result<GameState> {
    let mut game = settings.new_game();
    if let Some(moves) = &cli.moves {
        info!(count = moves.0.len(), "Replaying moves from command line");
        game.apply_moves(&moves.0)?;
    }
    Ok(game)
}

/// Logs to a file so output does not corrupt the terminal UI.
fn initialize_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}
