//! # Octopus CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Every command is
//! started with a scrubbed environment so the developer's own `OCTOPUS_*`
//! variables, `CI` flag or config file never leak into a test run.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use tempfile::TempDir;

pub const TEST_API_KEY: &str = "API-TESTKEY";

/// # Get Octopus Command (`octopus_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `octopus` binary with
/// every setting-related variable removed and the config directory pointed at
/// `home`.
///
/// ## Panics
/// Panics if the `octopus` binary cannot be found via `Command::cargo_bin`.
pub fn octopus_cmd(home: &TempDir) -> Command {
    let mut cmd =
        Command::cargo_bin("octopus").expect("Failed to find octopus binary for testing");
    for var in [
        "OCTOPUS_HOST",
        "OCTOPUS_API_KEY",
        "OCTOPUS_SPACE",
        "OCTOPUS_FORMAT",
        "CI",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"));
    cmd
}

/// `octopus_cmd` already connected to `host` with the test API key.
pub fn connected_cmd(home: &TempDir, host: &str) -> Command {
    let mut cmd = octopus_cmd(home);
    cmd.env("OCTOPUS_HOST", host).env("OCTOPUS_API_KEY", TEST_API_KEY);
    cmd
}

pub fn temp_home() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary home directory")
}
