//! # Octopus Account Command Group
//!
//! File: cli/src/commands/account/mod.rs
//!
//! ## Overview
//!
//! Entry point and router for `octopus account`. Accounts are scoped to a
//! space. Creation is split by account type; only SSH key pairs are supported.
//!
//! ```bash
//! octopus account list
//! octopus account ssh create -n "Web servers" -u deploy -K ~/.ssh/id_ed25519
//! ```
//!
use super::CommandContext;
use crate::core::error::Result;
use clap::{Parser, Subcommand};
use std::io::Write;

/// Implements `octopus account list`.
mod list;
/// Subcommands for SSH key-pair accounts.
mod ssh;

#[derive(Parser, Debug)]
pub struct AccountArgs {
    #[command(subcommand)]
    command: AccountCommand,
}

#[derive(Subcommand, Debug)]
enum AccountCommand {
    /// List accounts.
    #[command(alias = "ls")]
    List(list::ListArgs),
    /// Manage SSH key-pair accounts.
    Ssh(ssh::SshArgs),
}

/// Dispatches `octopus account <subcommand>`.
pub async fn handle_account(
    ctx: &mut CommandContext,
    args: AccountArgs,
    out: &mut dyn Write,
) -> Result<()> {
    match args.command {
        AccountCommand::List(args) => list::handle_list(ctx, args, out).await?,
        AccountCommand::Ssh(args) => ssh::handle_ssh(ctx, args, out).await?,
    }
    Ok(())
}
