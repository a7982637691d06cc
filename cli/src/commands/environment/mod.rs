//! # Octopus Environment Command Group
//!
//! File: cli/src/commands/environment/mod.rs
//!
//! ## Overview
//!
//! Entry point and router for `octopus environment` (alias `env`). Environments
//! live inside a space, so every subcommand resolves a space first.
//!
//! ```bash
//! octopus environment list --space Default
//! octopus env rm Staging --confirm
//! ```
//!
use super::CommandContext;
use crate::core::error::Result;
use clap::{Parser, Subcommand};
use std::io::Write;

/// Implements `octopus environment delete`.
mod delete;
/// Implements `octopus environment list`.
mod list;

#[derive(Parser, Debug)]
pub struct EnvironmentArgs {
    #[command(subcommand)]
    command: EnvironmentCommand,
}

#[derive(Subcommand, Debug)]
enum EnvironmentCommand {
    /// List environments.
    #[command(alias = "ls")]
    List(list::ListArgs),
    /// Delete an environment.
    #[command(alias = "rm")]
    Delete(delete::DeleteArgs),
}

/// Dispatches `octopus environment <subcommand>`.
pub async fn handle_environment(
    ctx: &mut CommandContext,
    args: EnvironmentArgs,
    out: &mut dyn Write,
) -> Result<()> {
    match args.command {
        EnvironmentCommand::List(args) => list::handle_list(ctx, args, out).await?,
        EnvironmentCommand::Delete(args) => delete::handle_delete(ctx, args, out).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_aliases() {
        let args = EnvironmentArgs::try_parse_from(["environment", "ls"]).unwrap();
        assert!(matches!(args.command, EnvironmentCommand::List(_)));

        let args = EnvironmentArgs::try_parse_from(["environment", "rm", "Dev", "-y"]).unwrap();
        match args.command {
            EnvironmentCommand::Delete(delete) => {
                assert_eq!(delete.name_or_id, "Dev");
                assert!(delete.confirm);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_delete_requires_a_target() {
        assert!(EnvironmentArgs::try_parse_from(["environment", "delete"]).is_err());
    }
}
