//! Tests for settings loading.

use std::io::Write;
use std::path::PathBuf;
use tictactoe_history::{HighlightPolicy, StepOrder};
use tictactoe_tui::Settings;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_or_default(dir.path().join("absent.toml")).unwrap();

    assert_eq!(settings, Settings::default());
    assert_eq!(*settings.highlight(), HighlightPolicy::Recompute);
    assert_eq!(*settings.step_order(), StepOrder::Ascending);
    assert_eq!(settings.log_file(), &PathBuf::from("tictactoe_tui.log"));
}

#[test]
fn test_file_overrides_fields() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "highlight = \"sticky\"\nstep_order = \"descending\"").unwrap();

    let settings = Settings::from_file(file.path()).unwrap();

    assert_eq!(*settings.highlight(), HighlightPolicy::Sticky);
    assert_eq!(*settings.step_order(), StepOrder::Descending);
    assert_eq!(settings.log_file(), &PathBuf::from("tictactoe_tui.log"));

    let game = settings.new_game();
    assert_eq!(game.highlight(), HighlightPolicy::Sticky);
    assert_eq!(game.step_order(), StepOrder::Descending);
}

#[test]
fn test_unknown_key_is_rejected() {
    let err = Settings::from_toml("colour = \"blue\"").unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_invalid_policy_is_rejected() {
    assert!(Settings::from_toml("highlight = \"sometimes\"").is_err());
}

#[test]
fn test_log_file_override() {
    let settings = Settings::default().with_log_file(PathBuf::from("other.log"));
    assert_eq!(settings.log_file(), &PathBuf::from("other.log"));
}
