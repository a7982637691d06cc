//! # Octopus CLI Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Root of the shared utility modules used by the command handlers. Keeping
//! them under `common::` separates command-specific logic (`commands::`) from
//! core infrastructure (`core::`).
//!
//! - **`fs`**: validating and reading files named on the command line or in prompts.
//! - **`output`**: rendering lists as tables, JSON or plain names.
//! - **`selectors`**: turning user-supplied names into server IDs.
//! - **`ui`**: interactive prompts behind the `Asker` trait.
//!
//! ```rust
//! use crate::common::{fs::io, output, selectors};
//!
//! let key = io::read_existing_file(&path)?;
//! let ids = selectors::resolve_environment_names(&client, &names).await?;
//! output::print_list(out, format, &environments, "No environments found.")?;
//! ```
//!

/// Utilities for filesystem operations (validation, reads).
pub mod fs;
/// List rendering in the supported output formats.
pub mod output;
/// Name-or-ID resolution and interactive pickers for server resources.
pub mod selectors;
/// Terminal user interface: prompts and the `Asker` seam.
pub mod ui;
