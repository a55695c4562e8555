//! Tests for loading search configuration from disk.

use minimax_tictactoe::{Minimax, Move, MoveOrder, SearchConfig, empty_board};
use std::io::Write;

#[test]
fn test_load_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "move_order = \"center-first\"").unwrap();
    writeln!(file, "parallel_root = true").unwrap();

    let config = SearchConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.move_order(), MoveOrder::CenterFirst);
    assert!(*config.parallel_root());

    let engine = Minimax::new(config);
    assert_eq!(engine.best_move(&empty_board()), Some(Move::CENTER));
}

#[test]
fn test_partial_config_file_uses_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "parallel_root = true").unwrap();

    let config = SearchConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.move_order(), MoveOrder::RowMajor);
    assert!(*config.parallel_root());
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = SearchConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_written_config_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("search.toml");
    let config = SearchConfig::default().with_move_order(MoveOrder::CenterFirst);
    std::fs::write(&path, config.to_toml_string().unwrap()).unwrap();

    assert_eq!(SearchConfig::from_file(&path).unwrap(), config);
}
