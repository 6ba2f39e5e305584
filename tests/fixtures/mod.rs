//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Path to the bbqp binary
pub fn bbqp_bin() -> String {
    std::env::var("CARGO_BIN_EXE_bbqp").unwrap_or_else(|_| "target/release/bbqp".to_string())
}

/// Creates a Command for the bbqp binary with the given arguments.
pub fn bbqp_command(args: &[&str]) -> Command {
    let mut cmd = Command::new(bbqp_bin());
    cmd.args(args);
    cmd
}

/// Creates a Command with an isolated config directory for testing.
/// Pass in a config directory path to share between multiple commands
/// in the same test.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(bbqp_bin());
    cmd.env("BBQP_CONFIG_DIR", config_dir);
    cmd.args(args);
    cmd
}

/// Creates a temporary directory to use as an isolated config dir.
pub fn temp_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp config dir")
}
