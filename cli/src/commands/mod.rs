//! # Octopus CLI Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates all top-level command groups of the Octopus CLI and
//! defines `CommandContext`, the state every handler receives.
//!
//! ## Architecture
//!
//! The commands follow a hierarchical structure mirroring the server's
//! resources:
//! - Top-level modules are command groups (`account`, `environment`, `space`)
//! - Each group declares its subcommands in their own files
//! - Each handler takes the `CommandContext`, its parsed arguments, and an
//!   output writer, and returns `Result<()>`
//!
//! Handlers get API handles from `ctx.factory`: `get_spaced_client()` for
//! anything inside a space, `get_system_client()` for server-wide resources.
//! Whether they may prompt is decided once, by whether `ctx.factory.asker()`
//! returns an asker.
//!
//! ## Command Groups
//!
//! - `account`: deployment credentials (`list`, `ssh create`)
//! - `environment`: deployment targets grouping (`list`, `delete`)
//! - `space`: multi-tenant partitions (`list`)
//!
use crate::common::output::OutputFormat;
use crate::core::factory::ClientFactory;

/// Command group for accounts. Includes `list` and `ssh create`.
pub mod account;
/// Command group for environments. Includes `list` and `delete`.
pub mod environment;
/// Command group for spaces. Includes `list`.
pub mod space;

/// State shared by every command handler for one process run.
pub struct CommandContext {
    pub factory: ClientFactory,
    pub output_format: OutputFormat,
}
