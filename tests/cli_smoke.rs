#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! Every invocation gets empty config and cache directories so a user's
//! own config file cannot change the output.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct Sandbox {
    _config: TempDir,
    _cache: TempDir,
    command: Command,
}

#[allow(deprecated)]
fn hinshi() -> Sandbox {
    let config = TempDir::new().unwrap();
    let cache = TempDir::new().unwrap();
    let mut command = Command::cargo_bin("hinshi").unwrap();
    command
        .env("XDG_CONFIG_HOME", config.path())
        .env("XDG_CACHE_HOME", cache.path())
        .env_remove("NO_COLOR");
    Sandbox {
        _config: config,
        _cache: cache,
        command,
    }
}

#[test]
fn test_help_displays_usage() {
    hinshi()
        .command
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Part-of-speech tagging"))
        .stdout(predicate::str::contains("--tags"))
        .stdout(predicate::str::contains("--exclude-color"))
        .stdout(predicate::str::contains("--translator"));
}

#[test]
fn test_version_displays_version() {
    hinshi()
        .command
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_tags_lists_table() {
    hinshi()
        .command
        .args(["tags"])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Penn Treebank tags"))
        .stdout(predicate::str::contains("NNP"))
        .stdout(predicate::str::contains("固有名詞"))
        .stdout(predicate::str::contains("Proper noun, singular"));
}

#[test]
fn test_languages_list() {
    hinshi()
        .command
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("ja"))
        .stdout(predicate::str::contains("Japanese"))
        .stdout(predicate::str::contains("zh-TW"))
        .stdout(predicate::str::contains("not available with the deepl translator"));
}

#[test]
fn test_pangram_in_japanese() {
    hinshi()
        .command
        .args([
            "--width",
            "40",
            "--tags",
            "japanese",
            "--no-color",
            "The quick brown fox jumps over the lazy dog.",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("限定詞"))
        .stdout(predicate::str::contains("名詞"))
        .stdout(predicate::str::contains("▔▔▔"))
        .stdout(predicate::str::contains(format!("\n{}\n", "─".repeat(40))))
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_list_layout_from_stdin() {
    hinshi()
        .command
        .args(["--width", "20", "--list", "--no-color"])
        .write_stdin("The dog runs.")
        .assert()
        .success()
        .stdout(predicate::str::contains("- DT"))
        .stdout(predicate::str::contains("- NN"));
}

#[test]
fn test_color_output_contains_escapes() {
    hinshi()
        .command
        .args(["--width", "20", "--color", "The dog runs."])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b["));
}

#[test]
fn test_missing_terminal_width_is_error() {
    hinshi()
        .command
        .args(["--no-color", "The dog runs."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--width"));
}

#[test]
fn test_empty_input_prints_nothing() {
    hinshi()
        .command
        .args(["--width", "20"])
        .write_stdin("   \n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_unknown_color_is_error() {
    hinshi()
        .command
        .args(["--width", "20", "--exclude-color", "mauve", "Hi."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown color: 'mauve'"));
}

#[test]
fn test_invalid_language_code() {
    hinshi()
        .command
        .args(["--width", "20", "--to", "invalid_lang_xyz", "Hi."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid language code"));
}

#[test]
fn test_repl_quits_on_q() {
    hinshi()
        .command
        .args(["repl", "--width", "20", "--no-color"])
        .write_stdin("q\nThe dog runs.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interactive mode has been initiated."))
        .stdout(predicate::str::contains("Interactive mode has been terminated."))
        .stdout(predicate::str::contains("▔").not());
}

#[test]
fn test_repl_analyzes_piped_lines() {
    hinshi()
        .command
        .args(["repl", "--width", "20", "--no-color", "--tags", "expansion"])
        .write_stdin("The dog runs.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Determiner"))
        .stdout(predicate::str::contains("Interactive mode has been terminated."));
}

#[test]
fn test_config_init_then_show() {
    let mut sandbox = hinshi();
    sandbox
        .command
        .args(["config", "--init"])
        .assert()
        .success();

    let config_file = sandbox._config.path().join("hinshi").join("config.toml");
    assert!(config_file.exists());

    #[allow(deprecated)]
    Command::cargo_bin("hinshi")
        .unwrap()
        .env("XDG_CONFIG_HOME", sandbox._config.path())
        .env("NO_COLOR", "1")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration"))
        .stdout(predicate::str::contains("abbreviation"))
        .stdout(predicate::str::contains("dark_grey"));
}
