//! # Octopus Account List Handler
//!
//! File: cli/src/commands/account/list.rs
//!
use crate::api::accounts::Account;
use crate::commands::CommandContext;
use crate::common::output::{self, Listable};
use crate::core::error::Result;
use clap::Parser;
use std::io::Write;
use tabled::Tabled;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "List accounts")]
pub struct ListArgs {}

#[derive(Tabled)]
pub struct AccountRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "TYPE")]
    account_type: String,
    #[tabled(rename = "ID")]
    id: String,
}

impl Listable for Account {
    type Row = AccountRow;
    type Json = Account;

    fn row(&self) -> AccountRow {
        AccountRow {
            name: self.name.clone(),
            account_type: self.account_type.clone(),
            id: self.id.clone(),
        }
    }

    fn json(&self) -> Account {
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
    info!("Handling account list command...");
    let client = ctx.factory.get_spaced_client().await?;
    let accounts = client.accounts().get_all().await?;
    info!(
        "Found {} accounts in space '{}'",
        accounts.len(),
        ctx.factory.get_active_space().map_or("?", |s| s.name.as_str())
    );
    output::print_list(out, ctx.output_format, &accounts, "No accounts found.")
}
