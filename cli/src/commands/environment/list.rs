//! # Octopus Environment List Handler
//!
//! File: cli/src/commands/environment/list.rs
//!
use crate::api::environments::Environment;
use crate::commands::CommandContext;
use crate::common::output::{self, Listable};
use crate::core::error::Result;
use clap::Parser;
use std::io::Write;
use tabled::Tabled;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "List environments")]
pub struct ListArgs {}

#[derive(Tabled)]
pub struct EnvironmentRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "DESCRIPTION")]
    description: String,
}

impl Listable for Environment {
    type Row = EnvironmentRow;
    type Json = Environment;

    fn row(&self) -> EnvironmentRow {
        EnvironmentRow {
            name: self.name.clone(),
            id: self.id.clone(),
            description: output::or_dash(self.description.as_deref()),
        }
    }

    fn json(&self) -> Environment {
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
    info!("Handling environment list command...");
    let client = ctx.factory.get_spaced_client().await?;
    let environments = client.environments().get_all().await?;
    info!(
        "Found {} environments in space '{}'",
        environments.len(),
        ctx.factory.get_active_space().map_or("?", |s| s.name.as_str())
    );
    output::print_list(out, ctx.output_format, &environments, "No environments found.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{context, rendered, spaces_body};
    use crate::common::output::OutputFormat;
    use httpmock::prelude::*;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_lists_environments_of_the_named_space() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/spaces/all");
            then.status(200).json_body(spaces_body());
        });
        let envs = server.mock(|when, then| {
            when.method(GET)
                .path("/api/Spaces-1/environments/all")
                .header("X-Octopus-ApiKey", "API-TESTKEY");
            then.status(200).json_body(json!([
                { "Id": "Environments-1", "Name": "Dev", "SortOrder": 0 },
                { "Id": "Environments-2", "Name": "Prod", "SortOrder": 1, "Description": "Live" }
            ]));
        });
        let mut ctx = context(&server, "default", None, OutputFormat::Json);
        let mut out = Vec::new();

        handle_list(&mut ctx, ListArgs {}, &mut out).await.unwrap();

        envs.assert();
        let printed: Value = serde_json::from_str(&rendered(out)).unwrap();
        assert_eq!(printed[1]["Name"], "Prod");
        assert_eq!(printed[1]["Description"], "Live");
    }

    #[tokio::test]
    async fn test_empty_table_prints_placeholder() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/spaces/all");
            then.status(200).json_body(spaces_body());
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/Spaces-1/environments/all");
            then.status(200).json_body(json!([]));
        });
        let mut ctx = context(&server, "Spaces-1", None, OutputFormat::Table);
        let mut out = Vec::new();

        handle_list(&mut ctx, ListArgs {}, &mut out).await.unwrap();

        assert_eq!(rendered(out), "No environments found.\n");
    }

    #[tokio::test]
    async fn test_no_space_in_no_prompt_mode_fails() {
        let server = MockServer::start_async().await;
        let mut ctx = context(&server, "", None, OutputFormat::Table);
        let mut out = Vec::new();

        let err = handle_list(&mut ctx, ListArgs {}, &mut out).await.unwrap_err();

        assert!(err.to_string().starts_with("space must be specified"));
        assert!(out.is_empty());
    }
}
