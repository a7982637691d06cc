//! # Octopus CLI Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the Octopus CLI. Every
//! failure the client can report on its own (missing credentials, an
//! unresolvable space, a rejected API call) is a variant of `OctoError`; all
//! other failures (I/O, JSON) travel as plain `anyhow::Error` values.
//!
//! ## Architecture
//!
//! - `OctoError`: a `thiserror` enum carrying a human-readable message for each
//!   failure the command layer may print.
//! - `Result<T>`: a type alias for `anyhow::Result<T>`.
//!
//! Errors are propagated unchanged to `main`, which prints them and exits
//! non-zero. Nothing is retried.
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if spaces.is_empty() {
//!     return Err(OctoError::NoSpaces.into());
//! }
//!
//! // Branch on a specific failure
//! match result {
//!     Err(e) if matches!(e.downcast_ref::<OctoError>(), Some(OctoError::SpaceRequired)) => {
//!         eprintln!("Set OCTOPUS_SPACE and retry");
//!     }
//!     other => other?,
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the Octopus CLI.
#[derive(Error, Debug)]
pub enum OctoError {
    /// One or more mandatory settings (host, API key) were not supplied.
    #[error("{}", missing_variables_message(.variables))]
    MissingEnvironment { variables: Vec<String> },

    #[error("Invalid server URL '{host}': {reason}")]
    InvalidHost { host: String, reason: String },

    #[error(
        "space must be specified when not running interactively; \
         please set the OCTOPUS_SPACE environment variable or specify --space on the command line"
    )]
    SpaceRequired,

    #[error("no spaces found")]
    NoSpaces,

    #[error("cannot find {kind} '{name}'")]
    NotFound { kind: &'static str, name: String },

    /// A space-scoped route was requested through a system handle.
    #[error("'{route}' requires a space-scoped client")]
    NotSpaceScoped { route: String },

    #[error("Octopus server returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Request to the Octopus server failed: {source}")]
    Http {
        #[from]
        source: reqwest::Error,
    },

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("{0}")]
    Validation(String),
}

fn missing_variables_message(variables: &[String]) -> String {
    variables
        .iter()
        .map(|v| format!("{v} environment variable is missing or blank"))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let missing = OctoError::MissingEnvironment {
            variables: vec!["OCTOPUS_HOST".into(), "OCTOPUS_API_KEY".into()],
        };
        assert_eq!(
            missing.to_string(),
            "OCTOPUS_HOST environment variable is missing or blank; \
             OCTOPUS_API_KEY environment variable is missing or blank"
        );

        let not_found = OctoError::NotFound {
            kind: "space",
            name: "Integrations".into(),
        };
        assert_eq!(not_found.to_string(), "cannot find space 'Integrations'");

        let api = OctoError::Api {
            status: 401,
            message: "Invalid API key".into(),
        };
        assert_eq!(
            api.to_string(),
            "Octopus server returned 401: Invalid API key"
        );
    }

    #[test]
    fn test_space_required_mentions_remedies() {
        let message = OctoError::SpaceRequired.to_string();
        assert!(message.contains("OCTOPUS_SPACE"));
        assert!(message.contains("--space"));
        assert!(!message.contains('\n'));
        assert!(message.contains("interactively; please set"));
    }
}
