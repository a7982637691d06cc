//! # Octopus Environment Delete Handler
//!
//! File: cli/src/commands/environment/delete.rs
//!
//! ## Overview
//!
//! Implements `octopus environment delete <name-or-id>`. The target is matched
//! by name first, then by ID, ignoring case. Deleting is irreversible, so the
//! user confirms interactively unless `--confirm` is given. In no-prompt mode
//! `--confirm` is mandatory.
//!
use crate::commands::CommandContext;
use crate::common::output;
use crate::common::selectors;
use crate::core::error::{OctoError, Result};
use clap::Parser;
use std::io::Write;
use tracing::{info, warn};

const CONFIRM_REQUIRED: &str =
    "cannot delete without confirmation when not running interactively; pass --confirm";

#[derive(Parser, Debug)]
#[command(about = "Delete an environment")]
pub struct DeleteArgs {
    /// Name or ID of the environment to delete.
    pub name_or_id: String,

    /// Don't ask for confirmation.
    #[arg(short = 'y', long)]
    pub confirm: bool,
}

pub async fn handle_delete(
    ctx: &mut CommandContext,
    args: DeleteArgs,
    out: &mut dyn Write,
) -> Result<()> {
    info!("Handling environment delete command for '{}'...", args.name_or_id);
    let client = ctx.factory.get_spaced_client().await?;
    let environments = client.environments().get_all().await?;
    let target = selectors::find_environment(&environments, &args.name_or_id).ok_or_else(|| {
        OctoError::NotFound {
            kind: "environment",
            name: args.name_or_id.clone(),
        }
    })?;

    if !args.confirm {
        let Some(asker) = ctx.factory.asker() else {
            return Err(OctoError::Validation(CONFIRM_REQUIRED.to_string()).into());
        };
        let message = format!(
            "Are you sure you want to delete environment {} ({})?",
            target.name, target.id
        );
        if !asker.confirm(&message, false)? {
            warn!("Deletion of '{}' cancelled", target.name);
            writeln!(out, "Cancelled.")?;
            return Ok(());
        }
    }

    client.environments().delete(&target.id).await?;
    writeln!(out, "Deleted environment {} ({}).", target.name, output::dim(&target.id))?;
    Ok(())
}
