//! # Octopus CLI Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the `octopus` command-line
//! client for Octopus Deploy. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Resolving settings (flags, environment, config file) and building the
//!   `ClientFactory`
//! - Routing execution to appropriate command handlers
//!
//! ## Architecture
//!
//! - Each top-level command group (`space`, `environment`, `account`) is a
//!   variant in the `Commands` enum
//! - Commands are mapped to handler functions in their respective modules
//! - All errors are propagated to this level for consistent handling
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! octopus --help
//!
//! # List environments in a space, with debug logging
//! OCTOPUS_HOST=https://octopus.example.com OCTOPUS_API_KEY=API-XXXX \
//!     octopus -vv environment list --space Default
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Resolve settings and build the client factory
//! 4. Route to the command handler
//! 5. Format and display any errors that occur
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

// Declare the top-level modules of the CLI crate.
mod api; // Octopus REST resources and the authenticated client
mod commands; // Command groups (space, environment, account)
mod common; // Shared utilities (fs, output, prompts, selectors)
mod core; // Core infrastructure (errors, config, client factory)

use crate::common::ui::prompts::{Asker, TerminalAsker};
use crate::core::config::{self, GlobalArgs, Settings};
use crate::core::factory::ClientFactory;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser)]
#[command(
    name = "octopus",
    about = "Octopus Deploy CLI",
    long_about = "Manage spaces, environments and accounts on an Octopus Deploy server.\n\
                  Connection details come from flags, OCTOPUS_* variables or the config file.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[command(flatten)]
    global: GlobalArgs,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Manage accounts.
    Account(commands::account::AccountArgs),
    /// Manage environments.
    #[command(alias = "env")]
    Environment(commands::environment::EnvironmentArgs),
    /// Manage spaces.
    Space(commands::space::SpaceArgs),
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let file = config::load_config_file()?;
    let settings =
        Settings::resolve(&cli.global, config::env_space(), file, config::ci_detected());

    let asker: Option<Box<dyn Asker>> = if settings.prompt_enabled {
        Some(Box::new(TerminalAsker::new()))
    } else {
        None
    };
    let mut factory = ClientFactory::from_settings(&settings, asker)?;
    if let Some(space) = config::space_override(&cli.global) {
        factory.set_space_name_or_id(space);
    }
    let prompts = if factory.is_prompt_enabled() {
        "enabled"
    } else {
        "disabled"
    };
    tracing::info!("Interactive prompts {}", prompts);
    let mut ctx = commands::CommandContext {
        factory,
        output_format: settings.output_format,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Commands::Account(args) => {
            commands::account::handle_account(&mut ctx, args, &mut out).await
        }
        Commands::Environment(args) => {
            commands::environment::handle_environment(&mut ctx, args, &mut out).await
        }
        Commands::Space(args) => commands::space::handle_space(&mut ctx, args, &mut out).await,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    // The API key lives in `cli.global`; only the command is logged.
    tracing::debug!("Parsed command: {:?}", cli.command);

    if let Err(e) = run(cli).await {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
