//! Integration tests for the `td` binary.
//!
//! Only the non-interactive surface is exercised here; launching without a
//! subcommand starts the TUI.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Get the path to the built `td` binary.
fn td_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("td");
    path
}

/// Run `td` with a clean config environment rooted at `home`.
fn run_td(home: &TempDir, args: &[&str]) -> Output {
    Command::new(td_bin())
        .args(args)
        .env_remove("TODOS_CONFIG")
        .env_remove("RUST_LOG")
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("HOME", home.path())
        .output()
        .expect("failed to run td")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn version_flag() {
    let home = TempDir::new().unwrap();
    let output = run_td(&home, &["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_prints_defaults_without_a_file() {
    let home = TempDir::new().unwrap();
    let output = run_td(&home, &["config"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("[ui]"));
    assert!(out.contains("notice_timeout_ms = 3000"));
    assert!(out.contains("default_filter = \"all\""));
    assert!(out.contains("level = \"info\""));
}

#[test]
fn config_reads_xdg_location() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("config").join("todos");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), "[ui]\ndefault_filter = \"pending\"\n").unwrap();

    let output = run_td(&home, &["config"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("default_filter = \"pending\""));
}

#[test]
fn explicit_config_and_filter_override() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("todos.toml");
    fs::write(&path, "[ui]\nnotice_timeout_ms = 1500\n").unwrap();

    let output = run_td(
        &home,
        &["--config", path.to_str().unwrap(), "--filter", "completed", "config"],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("notice_timeout_ms = 1500"));
    assert!(out.contains("default_filter = \"completed\""));
}

#[test]
fn config_env_var_is_used() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("env.toml");
    fs::write(&path, "[ui]\nshow_key_hints = false\n").unwrap();

    let output = Command::new(td_bin())
        .arg("config")
        .env("TODOS_CONFIG", &path)
        .env("HOME", home.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("show_key_hints = false"));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("nope.toml");
    let output = run_td(&home, &["--config", path.to_str().unwrap(), "config"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("error: could not read"));
}

#[test]
fn invalid_config_is_an_error() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("bad.toml");
    fs::write(&path, "[ui]\nnotice_timeout_ms = \"soon\"\n").unwrap();
    let output = run_td(&home, &["--config", path.to_str().unwrap(), "config"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("error: invalid config"));
}

#[test]
fn log_file_receives_events() {
    let home = TempDir::new().unwrap();
    let log = home.path().join("td.log");
    let output = run_td(&home, &["--log-file", log.to_str().unwrap(), "config"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = fs::read_to_string(&log).unwrap();
    assert!(text.contains("logging started"));
}
