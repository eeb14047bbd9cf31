//! Integration tests for stripeline CLI

use std::io::Write;
use std::process::{Command, Stdio};

fn run_stripeline_with_stdin(args: &[&str], stdin: &str) -> (String, String, bool) {
    let mut cmd_args = vec!["run", "-q", "-p", "stripeline", "--"];
    cmd_args.extend(args);

    let mut child = Command::new("cargo")
        .args(&cmd_args)
        .current_dir(env!("CARGO_MANIFEST_DIR").to_string() + "/..")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for command");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn run_stripeline(args: &[&str]) -> (String, String, bool) {
    run_stripeline_with_stdin(args, "")
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_stripeline(&["--help"]);

    assert!(success);
    assert!(stdout.contains("stripeline"));
    assert!(stdout.contains("print"));
    assert!(stdout.contains("rows"));
    assert!(stdout.contains("demo"));
    assert!(stdout.contains("--width"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_stripeline(&["--version"]);

    assert!(success);
    assert!(stdout.contains("stripeline"));
}

#[test]
fn test_print_pads_to_width() {
    let (stdout, _, success) = run_stripeline(&[
        "print", "--color", "never", "--width", "10", "--bg", "#DDDDDD", "Hello",
    ]);

    assert!(success);
    assert_eq!(stdout, "Hello    \n");
}

#[test]
fn test_print_without_fill() {
    let (stdout, _, success) =
        run_stripeline(&["print", "--color", "never", "--no-fill", "--bg", "green", "a", "b"]);

    assert!(success);
    assert_eq!(stdout, "a\nb\n");
}

#[test]
fn test_print_with_color_emits_escapes() {
    let (stdout, _, success) = run_stripeline(&["print", "--color", "always", "<red>hot</red>"]);

    assert!(success);
    assert!(stdout.contains("\x1b["));
    assert!(stdout.contains("hot"));
}

#[test]
fn test_rows_from_stdin() {
    let (stdout, _, success) = run_stripeline_with_stdin(
        &["rows", "--color", "never", "-w", "6", "--first", "red", "--second", "blue"],
        "one\ntwo\nthree\n",
    );

    assert!(success);
    assert_eq!(stdout, "one  \ntwo  \nthree\n");
}

#[test]
fn test_strip_command() {
    let (stdout, _, success) = run_stripeline(&["strip", "<b>bold</b> and <bg #fff>pale</bg #fff>"]);

    assert!(success);
    assert_eq!(stdout, "bold and pale\n");
}

#[test]
fn test_strict_markup_error() {
    let (stdout, stderr, success) = run_stripeline(&["print", "<red>never closed"]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("never closed") || stderr.contains("red"));
}

#[test]
fn test_no_strict_keeps_unknown_tags() {
    let (stdout, _, success) =
        run_stripeline(&["print", "--color", "never", "--no-strict", "<sparkle>x"]);

    assert!(success);
    assert_eq!(stdout, "<sparkle>x\n");
}

#[test]
fn test_demo() {
    let (stdout, _, success) = run_stripeline(&["demo", "--color", "never", "--width", "20"]);

    assert!(success);
    assert!(stdout.contains("TEXT 1"));
    assert!(stdout.contains("TEXT B"));
    assert!(!stdout.contains("<important>"));
    assert_eq!(stdout.lines().count(), 73);
}

#[test]
fn test_invalid_config_path() {
    let (_, stderr, success) = run_stripeline(&["--config", "/nonexistent/config.json", "demo"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("failed to read config"));
}
