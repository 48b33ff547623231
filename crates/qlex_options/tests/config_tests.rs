use qlex_options::{discover_options, find_config, read_options, LexOptions, LiteralMode, OptionsError};
use std::fs;
use tempfile::tempdir;

#[test]
fn finds_config_in_ancestor() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("src").join("lib");
    fs::create_dir_all(&nested).unwrap();
    let config = dir.path().join("qlex.json");
    fs::write(&config, r#"{"literals": "none"}"#).unwrap();

    assert_eq!(find_config(&nested), Some(config.clone()));
    let options = discover_options(&nested).unwrap();
    assert_eq!(options.literals, LiteralMode::None);
    assert!(options.keep_trivia);
}

#[test]
fn nearest_config_wins() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("pkg");
    fs::create_dir_all(&nested).unwrap();
    fs::write(dir.path().join("qlex.json"), r#"{"maxDiagnostics": 1}"#).unwrap();
    fs::write(nested.join("qlex.json"), r#"{"maxDiagnostics": 2}"#).unwrap();

    assert_eq!(discover_options(&nested).unwrap().max_diagnostics, Some(2));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = read_options(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, OptionsError::Io { .. }));
}

#[test]
fn malformed_file_names_the_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("qlex.json");
    fs::write(&path, "{ not json").unwrap();
    let err = read_options(&path).unwrap_err();
    assert!(matches!(err, OptionsError::InvalidFile { .. }));
    assert!(err.to_string().contains("qlex.json"));
}

#[test]
fn no_config_gives_defaults() {
    let dir = tempdir().unwrap();
    if find_config(dir.path()).is_none() {
        assert_eq!(discover_options(dir.path()).unwrap(), LexOptions::default());
    }
}
