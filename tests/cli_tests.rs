//! Integration tests for the flatsize CLI skeleton.
//!
//! These verify argument parsing and the command hierarchy without touching
//! a real flatpak installation.

#![allow(clippy::expect_used, deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn flatsize() -> Command {
    Command::cargo_bin("flatsize").expect("flatsize binary should exist")
}

// --- Help and version tests ---

#[test]
fn no_args_shows_help_and_exits_nonzero() {
    // clap with arg_required_else_help shows help on stderr and exits 2
    flatsize()
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "DPI and scaling overrides for Flatpak applications",
        ));
}

#[test]
fn help_flag_shows_usage_and_commands() {
    flatsize()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn version_flag_shows_version() {
    flatsize()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("flatsize"));
}

// --- Command hierarchy tests ---

#[test]
fn help_lists_all_commands() {
    let assert = flatsize().arg("--help").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    for command in ["apps", "vars", "show", "set", "reset", "run"] {
        assert!(stdout.contains(command), "missing {command} in: {stdout}");
    }
}

#[test]
fn unknown_command_fails() {
    flatsize()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn show_requires_an_app_id() {
    flatsize()
        .arg("show")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("APP_ID"));
}

#[test]
fn set_requires_at_least_one_assignment() {
    flatsize()
        .args(["set", "org.mozilla.firefox"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("NAME=VALUE"));
}

#[test]
fn set_rejects_malformed_assignment() {
    flatsize()
        .args(["set", "org.mozilla.firefox", "GDK_SCALE"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected NAME=VALUE"));
}

#[test]
fn reset_without_yes_refuses_non_interactively() {
    // Test processes have no TTY, so the confirmation gate must refuse
    // rather than reset.
    flatsize()
        .args(["reset", "org.mozilla.firefox"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));
}

// --- Static data ---

#[test]
fn vars_lists_all_nine_variables() {
    let assert = flatsize().arg("vars").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    for name in [
        "GDK_SCALE",
        "GDK_DPI_SCALE",
        "QT_SCALE_FACTOR",
        "QT_FONT_DPI",
        "QT_AUTO_SCREEN_SCALE_FACTOR",
        "QT_ENABLE_HIGHDPI_SCALING",
        "QT_SCREEN_SCALE_FACTORS",
        "ELECTRON_SCALE_FACTOR",
        "GNOME_DESKTOP_SCALE_FACTOR",
    ] {
        assert!(stdout.contains(name), "missing {name} in: {stdout}");
    }
}

#[test]
fn vars_json_is_a_nine_element_array() {
    let assert = flatsize().args(["vars", "--json"]).assert().success();
    let stdout = assert.get_output().stdout.clone();
    let parsed: serde_json::Value =
        serde_json::from_slice(&stdout).expect("vars --json emits valid JSON");
    let vars = parsed.as_array().expect("array");
    assert_eq!(vars.len(), 9);
    assert_eq!(vars[0]["name"], "GDK_SCALE");
    assert!(vars[0]["hint"].as_str().expect("hint").contains("scale"));
}
