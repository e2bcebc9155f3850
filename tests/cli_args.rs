//! Runs the built binary for the paths that never touch the terminal.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn shopcart_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_shopcart"))
}

#[test]
fn test_help_lists_options() {
    let output = shopcart_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--list-products"));
}

#[test]
fn test_list_products_prints_builtin_catalog() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = shopcart_cmd()
        .arg("--config")
        .arg(temp_dir.path().join("missing.toml"))
        .arg("--list-products")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "1\tT-Shirt\t₹4.99");
    assert_eq!(lines[3], "4\tWatch\t₹39.99");
}

#[test]
fn test_invalid_config_exits_with_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[defaults]\ntick_rate_ms = 0\n").expect("Failed to write config");

    let output = shopcart_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--list-products")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("loading configuration"));
    assert!(stderr.contains("tick_rate_ms"));
}
