//! # Octopus CLI Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! File helpers used by commands that take file arguments (`--private-key`,
//! `--description-file`) or prompt for a file path.
//!
//! - **`expand_path`**: expands a leading `~` to the user's home directory.
//! - **`ensure_existing_file`**: checks that a path names an existing regular file.
//! - **`read_file_to_string`** / **`read_file_to_bytes`**: read a whole file,
//!   with the file name in the error context.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! let key_path = io::expand_path("~/.ssh/id_ed25519");
//! io::ensure_existing_file(&key_path)?;
//! let key = io::read_file_to_bytes(&key_path)?;
//! ```
//!
use crate::core::error::{OctoError, Result};
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Expands a leading `~` in `raw` to the home directory.
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw.trim()).into_owned())
}

/// Ensures `path` exists and is a regular file.
///
/// # Errors
///
/// Returns `OctoError::Validation` if the path is missing or is not a file.
pub fn ensure_existing_file(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!(OctoError::Validation(format!(
            "file '{}' does not exist",
            path.display()
        )));
    }
    if !path.is_file() {
        anyhow::bail!(OctoError::Validation(format!(
            "'{}' is not a file",
            path.display()
        )));
    }
    debug!("Found file: {:?}", path);
    Ok(())
}

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Reads the entire content of a file as raw bytes.
pub fn read_file_to_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Expands, validates and reads a file given on the command line.
pub fn read_existing_file(raw: &Path) -> Result<Vec<u8>> {
    let path = expand_path(&raw.to_string_lossy());
    ensure_existing_file(&path)?;
    read_file_to_bytes(&path)
}
