//! # Octopus Space Command Group
//!
//! File: cli/src/commands/space/mod.rs
//!
//! ## Overview
//!
//! Entry point and router for `octopus space`. Spaces are server-wide, so these
//! commands run on the system client and never trigger space resolution.
//!
//! ```bash
//! octopus space list
//! octopus space ls --output-format json
//! ```
//!
use super::CommandContext;
use crate::core::error::Result;
use clap::{Parser, Subcommand};
use std::io::Write;

/// Implements `octopus space list`.
mod list;

#[derive(Parser, Debug)]
pub struct SpaceArgs {
    #[command(subcommand)]
    command: SpaceCommand,
}

#[derive(Subcommand, Debug)]
enum SpaceCommand {
    /// List spaces.
    #[command(alias = "ls")]
    List(list::ListArgs),
}

/// Dispatches `octopus space <subcommand>`.
pub async fn handle_space(
    ctx: &mut CommandContext,
    args: SpaceArgs,
    out: &mut dyn Write,
) -> Result<()> {
    match args.command {
        SpaceCommand::List(args) => list::handle_list(ctx, args, out).await?,
    }
    Ok(())
}
