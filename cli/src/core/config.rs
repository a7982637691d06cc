//! # Octopus CLI Configuration
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module resolves the settings a command invocation runs with: which
//! Octopus server to talk to, which API key to authenticate with, which space
//! to work in, how to format output, and whether interactive prompting is
//! allowed.
//!
//! ## Architecture
//!
//! Settings come from three sources, in order of precedence:
//! 1. Command-line flags (`--host`, `--api-key`, `--space`, `--output-format`)
//! 2. Environment variables (`OCTOPUS_HOST`, `OCTOPUS_API_KEY`, `OCTOPUS_SPACE`, `OCTOPUS_FORMAT`)
//! 3. The optional user config file `config.toml` in the platform config directory
//!    (e.g. `~/.config/octopus/config.toml` on Linux)
//!
//! Clap merges the first two for host, API key and format
//! (`#[arg(env = ...)]`); `Settings::resolve` then fills any remaining gaps from
//! the config file. The space is the exception: `Settings` carries the
//! `OCTOPUS_SPACE` / config file value the factory starts with, and `--space`
//! is applied afterwards through `ClientFactory::set_space_name_or_id` (see
//! `space_override`). Blank values count as absent.
//!
//! Prompting is disabled when the `CI` environment variable is present
//! (whatever its value) or when `--no-prompt` is passed.
//!
//! ## Examples
//!
//! ```rust
//! let file = config::load_config_file()?;
//! let settings =
//!     config::Settings::resolve(&cli.global, config::env_space(), file, config::ci_detected());
//! config::validate_mandatory(settings.host.as_deref(), settings.api_key.as_deref())?;
//! ```
//!
use crate::common::output::OutputFormat;
use crate::core::error::{OctoError, Result};
use anyhow::Context;
use clap::Args;
use directories::ProjectDirs;
use serde::Deserialize;
use std::{fs, path::Path};
use tracing::{debug, info, warn};

pub const ENV_HOST: &str = "OCTOPUS_HOST";
pub const ENV_API_KEY: &str = "OCTOPUS_API_KEY";
pub const ENV_SPACE: &str = "OCTOPUS_SPACE";
pub const ENV_FORMAT: &str = "OCTOPUS_FORMAT";
/// Presence (not value) of this variable disables prompting.
pub const ENV_CI: &str = "CI";

const CONFIG_FILENAME: &str = "config.toml";

/// Flags shared by every subcommand.
#[derive(Args, Debug, Default, Clone)]
pub struct GlobalArgs {
    /// URL of the Octopus server.
    #[arg(long, env = ENV_HOST, global = true)]
    pub host: Option<String>,

    /// API key used to authenticate with the Octopus server.
    #[arg(long, env = ENV_API_KEY, hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Name or ID of the space to work in. Overrides OCTOPUS_SPACE.
    #[arg(short, long, global = true)]
    pub space: Option<String>,

    /// Disable interactive prompts. Missing values become errors.
    #[arg(long, global = true)]
    pub no_prompt: bool,

    /// How list output is rendered.
    #[arg(short = 'f', long, value_enum, env = ENV_FORMAT, global = true)]
    pub output_format: Option<OutputFormat>,
}

/// Contents of the optional user config file.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub space: Option<String>,
    #[serde(default)]
    pub output_format: Option<OutputFormat>,
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub host: Option<String>,
    pub api_key: Option<String>,
    pub space: Option<String>,
    pub output_format: OutputFormat,
    pub prompt_enabled: bool,
}

impl Settings {
    /// Merges flags/environment with the config file. `env_space` is the
    /// `OCTOPUS_SPACE` value; `ci` is whether the CI indicator is present.
    pub fn resolve(
        args: &GlobalArgs,
        env_space: Option<String>,
        file: Option<ConfigFile>,
        ci: bool,
    ) -> Settings {
        let file = file.unwrap_or_default();
        let settings = Settings {
            host: non_blank(args.host.clone()).or_else(|| non_blank(file.host)),
            api_key: non_blank(args.api_key.clone()).or_else(|| non_blank(file.api_key)),
            space: non_blank(env_space).or_else(|| non_blank(file.space)),
            output_format: args
                .output_format
                .or(file.output_format)
                .unwrap_or_default(),
            prompt_enabled: !ci && !args.no_prompt,
        };
        debug!(
            host = ?settings.host,
            space = ?settings.space,
            api_key_set = settings.api_key.is_some(),
            prompt_enabled = settings.prompt_enabled,
            "Resolved settings"
        );
        settings
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// The `--space` flag, when given and not blank.
pub fn space_override(args: &GlobalArgs) -> Option<&str> {
    args.space
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// `OCTOPUS_SPACE` from the process environment.
pub fn env_space() -> Option<String> {
    std::env::var(ENV_SPACE).ok()
}

/// Whether the CI indicator is present in the process environment.
pub fn ci_detected() -> bool {
    std::env::var_os(ENV_CI).is_some()
}

/// Checks that host and API key were supplied, naming every missing one.
pub fn validate_mandatory(host: Option<&str>, api_key: Option<&str>) -> Result<()> {
    let mut missing = Vec::new();
    if host.map_or(true, |h| h.trim().is_empty()) {
        missing.push(ENV_HOST.to_string());
    }
    if api_key.map_or(true, |k| k.trim().is_empty()) {
        missing.push(ENV_API_KEY.to_string());
    }
    if missing.is_empty() {
        Ok(())
    } else {
        Err(OctoError::MissingEnvironment { variables: missing }.into())
    }
}

/// Loads the user config file, if one exists.
pub fn load_config_file() -> Result<Option<ConfigFile>> {
    let Some(proj_dirs) = ProjectDirs::from("com", "Octopus", "octopus") else {
        warn!("Could not determine user config directory.");
        return Ok(None);
    };
    let config_path = proj_dirs.config_dir().join(CONFIG_FILENAME);
    if config_path.is_file() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        Ok(None)
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}
