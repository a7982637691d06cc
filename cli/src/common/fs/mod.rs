//! # Octopus CLI Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Entry point for filesystem helpers. Currently only the `io` submodule,
//! which validates and reads files named on the command line or in prompts.
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! let description = io::read_file_to_string(&io::expand_path("~/notes/account.md"))?;
//! ```
//!

/// Contains file validation and read helpers (e.g., `ensure_existing_file`, `read_existing_file`).
pub mod io;
