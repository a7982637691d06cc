//! # Octopus SSH Account Command Group
//!
//! File: cli/src/commands/account/ssh/mod.rs
//!
use crate::commands::CommandContext;
use crate::core::error::Result;
use clap::{Parser, Subcommand};
use std::io::Write;

/// Implements `octopus account ssh create`.
mod create;

#[derive(Parser, Debug)]
pub struct SshArgs {
    #[command(subcommand)]
    command: SshCommand,
}

#[derive(Subcommand, Debug)]
enum SshCommand {
    /// Create an SSH key-pair account.
    Create(create::CreateArgs),
}

pub async fn handle_ssh(
    ctx: &mut CommandContext,
    args: SshArgs,
    out: &mut dyn Write,
) -> Result<()> {
    match args.command {
        SshCommand::Create(args) => create::handle_create(ctx, args, out).await?,
    }
    Ok(())
}
