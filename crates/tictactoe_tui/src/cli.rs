//! Command-line interface for the tic-tac-toe terminal UI.

use clap::Parser;
use std::path::PathBuf;
use tictactoe_history::Position;

/// Time-travel tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe_tui")]
#[command(about = "Tic-tac-toe with a clickable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Log file, overriding the settings file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Squares to play before the board is shown, e.g. "0,4,1"
    #[arg(long, value_parser = parse_moves)]
    pub moves: Option<MoveList>,

    /// Print the final move history as JSON on exit
    #[arg(long)]
    pub transcript: bool,
}

/// Board indices given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveList(pub Vec<Position>);

fn parse_moves(s: &str) -> Result<MoveList, String> {
    Position::parse_list(s)
        .map(MoveList)
        .ok_or_else(|| format!("expected comma separated squares 0-8, got {:?}", s))
}
