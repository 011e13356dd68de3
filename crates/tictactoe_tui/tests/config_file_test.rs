//! Tests for loading config from disk.

use std::io::Write;
use std::path::PathBuf;
use tictactoe_tui::{Cli, TuiConfig};

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "log_file = \"game.log\"\nlog_filter = \"tictactoe=debug\"").expect("write");

    let config = TuiConfig::from_file(file.path()).expect("load");
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    assert_eq!(config.log_filter(), "tictactoe=debug");
    assert!(*config.show_hints());
}

#[test]
fn test_cli_override_beats_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "log_file = \"game.log\"").expect("write");

    let cli = Cli {
        config: Some(file.path().to_path_buf()),
        log_file: Some(PathBuf::from("override.log")),
    };
    let config = cli.resolve_config().expect("config");
    assert_eq!(config.log_file(), &PathBuf::from("override.log"));
}
