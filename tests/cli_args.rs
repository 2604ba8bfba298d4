//! Tests for the `trans` binary.

use std::path::Path;
use std::process::{Command, Output};

use trans::config::Config;

fn trans_cmd(config: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_trans"));
    cmd.env_remove("TRANS_LOG").arg("--config-file").arg(config);
    cmd
}

fn run(config: &Path, args: &[&str]) -> Output {
    trans_cmd(config)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_help_lists_modes_and_flags() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&dir.path().join("config.toml"), &["-h"]);

    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("-m, --multi-lang"));
    assert!(stdout.contains("-dm, --default-mode <value>"));
}

#[test]
fn test_translation_request_is_printed() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&dir.path().join("config.toml"), &["de", "suchen", "pl"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "single (de -> pl): suchen\n");
}

#[test]
fn test_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(
        &dir.path().join("config.toml"),
        &["--json", "suchen", "de", "-m", "pl", "fr"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["mode"], "multi-lang");
    assert_eq!(value["from_lang"], "de");
    assert_eq!(value["to_langs"], serde_json::json!(["pl", "fr"]));
    assert_eq!(value["words"], serde_json::json!(["suchen"]));
}

#[test]
fn test_limit_is_saved_and_shown() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");

    let output = run(&config, &["-l", "5"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(std::fs::read_to_string(&config).unwrap().contains("language_limit = 5"));

    let output = run(&config, &["-l"]);
    assert_eq!(stdout(&output), "limit: 5\n");
}

#[test]
fn test_invalid_limit_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    let output = run(&config, &["-l", "many"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: invalid language limit 'many'"));
    assert!(!config.exists());
}

#[test]
fn test_saved_languages_fill_missing_slots() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");

    let output = run(&config, &["-al", "de", "pl", "fr"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let output = run(&config, &["suchen", "-m"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "multi-lang (de -> pl, fr): suchen\n");
}

#[test]
fn test_used_languages_move_to_front() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(
        &config,
        "[translation]\nsaved_languages = [\"fr\", \"es\", \"de\", \"pl\"]\n",
    )
    .unwrap();

    let output = run(&config, &["suchen", "de", "pl"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let output = run(&config, &["-ll"]);
    assert_eq!(stdout(&output), "langs: de, pl, fr, es\n");
}

#[test]
fn test_mode_conflict_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&dir.path().join("config.toml"), &["-s", "-m", "suchen"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: translation modes"));
}

#[test]
fn test_no_word_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&dir.path().join("config.toml"), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: no word to translate"));
}

#[test]
fn test_missing_languages_exit_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&dir.path().join("config.toml"), &["suchen"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("no source language for 'suchen'"));
}

#[test]
fn test_unknown_flag_warns_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&dir.path().join("config.toml"), &["-x", "de", "pl"]);

    assert!(output.status.success());
    assert!(stderr(&output).contains("Warning: -x: unknown flag"));
}

#[test]
fn test_default_mode_directive() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");

    let output = run(&config, &["-dm", "m"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let output = run(&config, &["-dm"]);
    assert_eq!(stdout(&output), "default-mode: multi-lang\n");
}

#[test]
fn test_added_languages_feed_the_same_translation() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");

    let output = run(&config, &["suchen", "-al", "de", "pl"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "single (de -> pl): suchen\n");
    let saved = Config::load_from(&config).unwrap();
    assert_eq!(saved.translation.saved_languages, vec!["de", "pl"]);
}

#[test]
fn test_directive_is_kept_when_translation_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");

    let output = run(&config, &["-l", "5", "suchen"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("no source language for 'suchen'"));
    assert!(std::fs::read_to_string(&config).unwrap().contains("language_limit = 5"));
}

#[test]
fn test_reverse_swaps_languages() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&dir.path().join("config.toml"), &["żal", "de", "pl", "-r"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "single (pl -> de): żal\n");
}

#[test]
fn test_layout_settings_are_saved_and_used() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[layout.keyboard.uk]\n\"ву\" = \"de\"\n\"зд\" = \"pl\"\n").unwrap();

    let output = run(&config, &["-lam", "keyboard", "-lal", "uk"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let output = run(&config, &["-lam", "-lal"]);
    assert_eq!(stdout(&output), "layout-method: keyboard\nlayout-lang: uk\n");

    let output = run(&config, &["привіт", "ву", "зд"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "single (de -> pl): привіт\n");
}

#[test]
fn test_invalid_layout_method_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&dir.path().join("config.toml"), &["-lam", "qwerty"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: invalid layout adjustment method 'qwerty'"));
}
