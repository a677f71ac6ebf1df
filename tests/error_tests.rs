//! Error scenario integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sound_cue_bin(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sound-cue").expect("binary should build");
    cmd.env("HOME", config_home.path())
        .env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn config_get_unknown_key() {
    let home = TempDir::new().unwrap();
    sound_cue_bin(&home)
        .args(["config", "get", "unknown_key"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn config_set_unknown_key() {
    let home = TempDir::new().unwrap();
    sound_cue_bin(&home)
        .args(["config", "set", "unknown_key", "value"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Valid keys"));
}

#[test]
fn config_set_non_boolean() {
    let home = TempDir::new().unwrap();
    sound_cue_bin(&home)
        .args(["config", "set", "audioNotifications.breakpointHit", "loud"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("'true' or 'false'"));
}

#[test]
fn config_init_twice() {
    let home = TempDir::new().unwrap();
    sound_cue_bin(&home)
        .args(["config", "init"])
        .assert()
        .success();

    sound_cue_bin(&home)
        .args(["config", "init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn malformed_config_file_is_reported_by_config_commands() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("sound-cue");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "audioNotifications = [").unwrap();

    sound_cue_bin(&home)
        .args(["config", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("parse"));
}

#[test]
fn malformed_config_file_does_not_break_play() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("sound-cue");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "audioNotifications = [").unwrap();

    sound_cue_bin(&home)
        .args(["play", "--silent"])
        .assert()
        .success();
}

#[test]
fn play_unknown_sound_is_usage_error() {
    let home = TempDir::new().unwrap();
    sound_cue_bin(&home)
        .args(["play", "step-over"])
        .assert()
        .code(2);
}
