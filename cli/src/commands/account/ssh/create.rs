//! # Octopus SSH Account Create Handler
//!
//! File: cli/src/commands/account/ssh/create.rs
//!
//! ## Overview
//!
//! Implements `octopus account ssh create`. Values come from flags first; when
//! prompting is enabled anything missing is asked for, in this order:
//!
//! 1. Name (required, at most 200 characters)
//! 2. Description (optional, opened in an editor)
//! 3. Username (required)
//! 4. Private Key File Path (required, must exist)
//! 5. Passphrase (optional, hidden)
//! 6. Environments (multi-select, nothing selected means "any environment")
//!
//! In no-prompt mode the name, username and private key must all be given as
//! flags.
//!
//! ```bash
//! octopus account ssh create -n "Web servers" -u deploy -K ~/.ssh/id_ed25519 -e Dev -e Test
//! ```
//!
use crate::api::accounts::{SensitiveValue, SshKeyPairAccount};
use crate::api::ApiClient;
use crate::commands::CommandContext;
use crate::common::fs::io;
use crate::common::output;
use crate::common::selectors;
use crate::common::ui::prompts::{Asker, InputQuestion};
use crate::core::error::{OctoError, Result};
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const NAME_HELP: &str = "A short, memorable, unique name for this account.";
const DESCRIPTION_HELP: &str = "A summary explaining the use of the account to other users.";
const USERNAME_HELP: &str = "The username to use when authenticating against the remote host.";
const PRIVATE_KEY_HELP: &str = "Path to the private key file portion of the key pair.";
const PASSPHRASE_HELP: &str = "The passphrase for the private key, if required.";
const ANY_ENVIRONMENT_HINT: &str =
    "If nothing is selected, the account can be used for deployments to any environment.";
const MAX_NAME_LENGTH: usize = 200;

#[derive(Parser, Default)]
#[command(about = "Create an SSH key-pair account")]
pub struct CreateArgs {
    /// A short, memorable, unique name for this account.
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// A summary explaining the use of the account to other users.
    #[arg(short = 'd', long, conflicts_with = "description_file")]
    pub description: Option<String>,

    /// Read the description from FILE.
    #[arg(short = 'D', long, value_name = "FILE")]
    pub description_file: Option<PathBuf>,

    /// Path to the private key file portion of the key pair.
    #[arg(short = 'K', long, value_name = "FILE")]
    pub private_key: Option<PathBuf>,

    /// The username to use when authenticating against the remote host.
    #[arg(short = 'u', long)]
    pub username: Option<String>,

    /// The passphrase for the private key, if required.
    #[arg(short = 'p', long)]
    pub passphrase: Option<String>,

    /// An environment allowed to use this account, by name or ID. Repeatable.
    #[arg(
        short = 'e',
        long = "environment",
        visible_alias = "environments",
        value_name = "ENVIRONMENT"
    )]
    pub environments: Vec<String>,
}

impl std::fmt::Debug for CreateArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateArgs")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("description_file", &self.description_file)
            .field("private_key", &self.private_key)
            .field("username", &self.username)
            .field("passphrase", &self.passphrase.as_ref().map(|_| "<redacted>"))
            .field("environments", &self.environments)
            .finish()
    }
}

/// Everything needed to create the account. Empty strings mean "not given".
#[derive(Default)]
pub struct CreateOptions {
    pub name: String,
    pub description: String,
    pub username: String,
    pub key_file_data: Vec<u8>,
    pub passphrase: String,
    /// `None` until given on the command line or chosen interactively.
    pub environment_ids: Option<Vec<String>>,
}

impl CreateOptions {
    /// Reads the files named by `args` and resolves its environments to IDs.
    pub async fn from_args(client: &ApiClient, args: CreateArgs) -> Result<Self> {
        let description = match &args.description_file {
            Some(path) => {
                let path = io::expand_path(&path.to_string_lossy());
                io::ensure_existing_file(&path)?;
                io::read_file_to_string(&path)?
            }
            None => args.description.unwrap_or_default(),
        };
        let key_file_data = match &args.private_key {
            Some(path) => io::read_existing_file(path)?,
            None => Vec::new(),
        };
        let environment_ids = if args.environments.is_empty() {
            None
        } else {
            Some(selectors::resolve_environment_names(client, &args.environments).await?)
        };
        Ok(CreateOptions {
            name: args.name.unwrap_or_default().trim().to_string(),
            description,
            username: args.username.unwrap_or_default().trim().to_string(),
            key_file_data,
            passphrase: args.passphrase.unwrap_or_default(),
            environment_ids,
        })
    }

    fn ensure_complete(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push("--name");
        }
        if self.username.is_empty() {
            missing.push("--username");
        }
        if self.key_file_data.is_empty() {
            missing.push("--private-key");
        }
        if missing.is_empty() {
            return Ok(());
        }
        Err(OctoError::Validation(format!(
            "{} must be specified when not running interactively",
            missing.join(", ")
        ))
        .into())
    }
}

pub async fn handle_create(
    ctx: &mut CommandContext,
    args: CreateArgs,
    out: &mut dyn Write,
) -> Result<()> {
    info!("Handling account ssh create command...");
    let client = ctx.factory.get_spaced_client().await?;
    let opts = CreateOptions::from_args(&client, args).await?;
    create_run(&client, ctx.factory.asker(), opts, out).await
}

/// Completes `opts` (prompting when `asker` is given) and creates the account.
pub async fn create_run(
    client: &ApiClient,
    asker: Option<&dyn Asker>,
    mut opts: CreateOptions,
    out: &mut dyn Write,
) -> Result<()> {
    match asker {
        Some(asker) => prompt_missing(asker, client, &mut opts).await?,
        None => opts.ensure_complete()?,
    }

    let mut account = SshKeyPairAccount::new(&opts.name, &opts.username, &opts.key_file_data);
    account.description = opts.description;
    account.environment_ids = opts.environment_ids.unwrap_or_default();
    if !opts.passphrase.is_empty() {
        account.private_key_passphrase = Some(SensitiveValue::new(opts.passphrase));
    }

    let created = client.accounts().add_ssh_key_pair(&account).await?;
    debug!("Server assigned {} to account '{}'", created.id, created.name);
    writeln!(
        out,
        "Successfully created SSH Account {} {}.",
        created.name,
        output::dim(format!("({})", created.id))
    )?;
    Ok(())
}

fn environments_message() -> String {
    format!(
        "Choose the environments that are allowed to use this account.\n{}",
        output::dim(ANY_ENVIRONMENT_HINT)
    )
}

/// Asks for every value still missing from `opts`.
pub async fn prompt_missing(
    asker: &dyn Asker,
    client: &ApiClient,
    opts: &mut CreateOptions,
) -> Result<()> {
    if opts.name.is_empty() {
        opts.name = asker.input(
            &InputQuestion::new("Name", NAME_HELP)
                .required()
                .max_length(MAX_NAME_LENGTH),
        )?;
    }

    if opts.description.is_empty() {
        opts.description = asker.editor("Description", DESCRIPTION_HELP, ".md")?;
    }

    if opts.username.is_empty() {
        opts.username = asker.input(&InputQuestion::new("Username", USERNAME_HELP).required())?;
    }

    if opts.key_file_data.is_empty() {
        let path = asker.input(
            &InputQuestion::new("Private Key File Path", PRIVATE_KEY_HELP)
                .required()
                .existing_file(),
        )?;
        opts.key_file_data = io::read_existing_file(Path::new(&path))?;
    }

    if opts.passphrase.is_empty() {
        opts.passphrase = asker.password("Passphrase", PASSPHRASE_HELP)?;
    }

    if opts.environment_ids.is_none() {
        let ids =
            selectors::environments_multi_select(asker, client, &environments_message()).await?;
        opts.environment_ids = Some(ids);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{context, rendered, spaces_body};
    use crate::common::output::OutputFormat;
    use crate::common::ui::prompts::testing::{Answer, ScriptedAsker};
    use httpmock::prelude::*;
    use serde_json::json;
    use tempfile::{tempdir, TempDir};

    fn key_file() -> (TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("id_ed25519");
        std::fs::write(&path, "KEY").unwrap();
        (dir, path)
    }

    fn mock_space(server: &MockServer) {
        server.mock(|when, then| {
            when.method(GET).path("/api/spaces/all");
            then.status(200).json_body(spaces_body());
        });
    }

    fn mock_environments(server: &MockServer) {
        server.mock(|when, then| {
            when.method(GET).path("/api/Spaces-1/environments/all");
            then.status(200).json_body(json!([
                { "Id": "Environments-1", "Name": "Dev" },
                { "Id": "Environments-2", "Name": "Test" },
                { "Id": "Environments-3", "Name": "Prod" }
            ]));
        });
    }

    #[test]
    fn test_parses_all_flags() {
        let args = CreateArgs::try_parse_from([
            "create",
            "-n",
            "Web",
            "-d",
            "Web hosts",
            "-K",
            "~/.ssh/id",
            "-u",
            "deploy",
            "-p",
            "s3cret",
            "-e",
            "Dev",
            "--environments",
            "Test",
        ])
        .unwrap();
        assert_eq!(args.name.as_deref(), Some("Web"));
        assert_eq!(args.private_key, Some(PathBuf::from("~/.ssh/id")));
        assert_eq!(args.environments, vec!["Dev", "Test"]);
    }

    #[test]
    fn test_description_and_description_file_conflict() {
        let result = CreateArgs::try_parse_from(["create", "-d", "inline", "-D", "notes.md"]);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_creates_from_flags_without_prompting() {
        let server = MockServer::start_async().await;
        mock_space(&server);
        mock_environments(&server);
        let create = server.mock(|when, then| {
            when.method(POST).path("/api/Spaces-1/accounts").json_body(json!({
                "AccountType": "SshKeyPair",
                "Name": "Web servers",
                "Description": "Web hosts",
                "Username": "deploy",
                "PrivateKeyFile": { "HasValue": true, "NewValue": "S0VZ" },
                "PrivateKeyPassphrase": { "HasValue": true, "NewValue": "s3cret" },
                "EnvironmentIds": ["Environments-3", "Environments-1"],
                "TenantedDeploymentParticipation": "Untenanted",
                "TenantIds": [],
                "TenantTags": []
            }));
            then.status(201).json_body(json!({
                "Id": "Accounts-7",
                "Name": "Web servers",
                "AccountType": "SshKeyPair"
            }));
        });
        let (_dir, key) = key_file();
        let mut ctx = context(&server, "Default", None, OutputFormat::Table);
        let mut out = Vec::new();
        let args = CreateArgs {
            name: Some("Web servers".into()),
            description: Some("Web hosts".into()),
            private_key: Some(key),
            username: Some("deploy".into()),
            passphrase: Some("s3cret".into()),
            environments: vec!["prod".to_string(), "Environments-1".to_string()],
            ..Default::default()
        };

        handle_create(&mut ctx, args, &mut out).await.unwrap();

        create.assert();
        let printed = console::strip_ansi_codes(&rendered(out)).to_string();
        assert_eq!(printed, "Successfully created SSH Account Web servers (Accounts-7).\n");
    }

    #[tokio::test]
    async fn test_no_prompt_reports_every_missing_flag() {
        let server = MockServer::start_async().await;
        mock_space(&server);
        let create = server.mock(|when, then| {
            when.method(POST).path("/api/Spaces-1/accounts");
            then.status(201);
        });
        let mut ctx = context(&server, "Default", None, OutputFormat::Table);
        let mut out = Vec::new();
        let args = CreateArgs {
            name: Some("Web servers".into()),
            ..Default::default()
        };

        let err = handle_create(&mut ctx, args, &mut out).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "--username, --private-key must be specified when not running interactively"
        );
        create.assert_hits(0);
    }

    #[tokio::test]
    async fn test_unknown_environment_flag_fails_before_create() {
        let server = MockServer::start_async().await;
        mock_space(&server);
        mock_environments(&server);
        let (_dir, key) = key_file();
        let mut ctx = context(&server, "Default", None, OutputFormat::Table);
        let mut out = Vec::new();
        let args = CreateArgs {
            name: Some("Web".into()),
            private_key: Some(key),
            username: Some("deploy".into()),
            environments: vec!["Staging".to_string()],
            ..Default::default()
        };

        let err = handle_create(&mut ctx, args, &mut out).await.unwrap_err();

        assert_eq!(err.to_string(), "cannot find environment 'Staging'");
    }

    #[tokio::test]
    async fn test_missing_key_file_is_rejected() {
        let server = MockServer::start_async().await;
        mock_space(&server);
        let dir = tempdir().unwrap();
        let mut ctx = context(&server, "Default", None, OutputFormat::Table);
        let mut out = Vec::new();
        let args = CreateArgs {
            private_key: Some(dir.path().join("nope")),
            ..Default::default()
        };

        let err = handle_create(&mut ctx, args, &mut out).await.unwrap_err();

        assert!(err.to_string().contains("does not exist"));
    }

    #[tokio::test]
    async fn test_prompts_for_everything_in_order() {
        let server = MockServer::start_async().await;
        mock_space(&server);
        mock_environments(&server);
        let create = server.mock(|when, then| {
            when.method(POST).path("/api/Spaces-1/accounts").json_body(json!({
                "AccountType": "SshKeyPair",
                "Name": "Web servers",
                "Username": "deploy",
                "PrivateKeyFile": { "HasValue": true, "NewValue": "S0VZ" },
                "EnvironmentIds": ["Environments-2"],
                "TenantedDeploymentParticipation": "Untenanted",
                "TenantIds": [],
                "TenantTags": []
            }));
            then.status(201).json_body(json!({
                "Id": "Accounts-8",
                "Name": "Web servers",
                "AccountType": "SshKeyPair"
            }));
        });
        let (_dir, key) = key_file();
        let asker = ScriptedAsker::new([
            Answer::Text("Web servers".into()),
            Answer::Text(String::new()),
            Answer::Text("deploy".into()),
            Answer::Text(key.to_string_lossy().into_owned()),
            Answer::Text(String::new()),
            Answer::Choices(vec![1]),
        ]);
        let mut ctx = context(&server, "Default", Some(asker.clone()), OutputFormat::Table);
        let mut out = Vec::new();

        handle_create(&mut ctx, CreateArgs::default(), &mut out).await.unwrap();

        create.assert();
        assert_eq!(
            asker.asked(),
            vec![
                "Name".to_string(),
                "Description".to_string(),
                "Username".to_string(),
                "Private Key File Path".to_string(),
                "Passphrase".to_string(),
                environments_message(),
            ]
        );
        assert_eq!(asker.remaining(), 0);
    }

    #[tokio::test]
    async fn test_only_missing_values_are_prompted() {
        let server = MockServer::start_async().await;
        mock_space(&server);
        mock_environments(&server);
        server.mock(|when, then| {
            when.method(POST).path("/api/Spaces-1/accounts");
            then.status(201).json_body(json!({
                "Id": "Accounts-9",
                "Name": "Web",
                "AccountType": "SshKeyPair"
            }));
        });
        let (_dir, key) = key_file();
        let asker = ScriptedAsker::new([Answer::Text("deploy".into()), Answer::Text("pw".into())]);
        let mut ctx = context(&server, "Default", Some(asker.clone()), OutputFormat::Table);
        let mut out = Vec::new();
        let args = CreateArgs {
            name: Some("Web".into()),
            description: Some("Hosts".into()),
            private_key: Some(key),
            environments: vec!["Dev".to_string()],
            ..Default::default()
        };

        handle_create(&mut ctx, args, &mut out).await.unwrap();

        assert_eq!(asker.asked(), vec!["Username".to_string(), "Passphrase".to_string()]);
    }

    #[tokio::test]
    async fn test_name_longer_than_limit_is_rejected() {
        let server = MockServer::start_async().await;
        let client = ApiClient::new(
            reqwest::Client::new(),
            url::Url::parse(&server.base_url()).unwrap(),
            "API-TESTKEY",
            Some("Spaces-1"),
        )
        .unwrap();
        let asker = ScriptedAsker::new([Answer::Text("x".repeat(MAX_NAME_LENGTH + 1))]);
        let mut opts = CreateOptions::default();

        let err = prompt_missing(&asker, &client, &mut opts).await.unwrap_err();

        assert!(err.to_string().contains("max length is 200"));
    }
}
