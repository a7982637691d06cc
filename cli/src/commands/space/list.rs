//! # Octopus Space List Handler
//!
//! File: cli/src/commands/space/list.rs
//!
//! Implements `octopus space list`: prints every space visible to the API key.
//!
use crate::api::Space;
use crate::commands::CommandContext;
use crate::common::output::{self, Listable};
use crate::core::error::Result;
use clap::Parser;
use std::io::Write;
use tabled::Tabled;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "List spaces")]
pub struct ListArgs {}

#[derive(Tabled)]
pub struct SpaceRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "DEFAULT")]
    default: String,
}

impl Listable for Space {
    type Row = SpaceRow;
    type Json = Space;

    fn row(&self) -> SpaceRow {
        SpaceRow {
            name: self.name.clone(),
            id: self.id.clone(),
            default: if self.is_default { "yes" } else { "" }.to_string(),
        }
    }

    fn json(&self) -> Space {
        self.clone()
    }

    fn basic(&self) -> String {
        self.name.clone()
    }
}

pub async fn handle_list(
    ctx: &mut CommandContext,
    _args: ListArgs,
    out: &mut dyn Write,
) -> Result<()> {
    info!("Handling space list command...");
    let client = ctx.factory.get_system_client()?;
    let spaces = client.spaces().get_all().await?;
    output::print_list(out, ctx.output_format, &spaces, "No spaces found.")
}
