//! # Octopus Client Factory
//!
//! File: cli/src/core/factory.rs
//!
//! ## Overview
//!
//! `ClientFactory` hands command handlers an authenticated `ApiClient`. It
//! holds the credentials and target host for the whole process run, and lazily
//! resolves and memoizes two kinds of handle:
//!
//! - a **system** handle, not bound to any space, for server-wide calls such as
//!   listing spaces;
//! - a **space-scoped** handle, bound to the space named by `--space` /
//!   `OCTOPUS_SPACE` or chosen interactively.
//!
//! A space-scoped handle can do everything a system handle can, so once one
//! exists the separate system handle is dropped and `get_system_client`
//! returns the space-scoped one.
//!
//! ## Space resolution
//!
//! 1. No space requested, no asker (no-prompt mode): fail immediately with
//!    `OctoError::SpaceRequired`. Automation never guesses.
//! 2. No space requested, asker present: list spaces. None is an error, exactly
//!    one is picked automatically, more than one is offered as a selection.
//! 3. Space requested: list spaces and match case-insensitively on name, then
//!    fall back to a case-insensitive ID match.
//!
//! Network failures are returned as-is. Nothing is retried.
//!
//! ## Usage
//!
//! ```rust
//! let mut factory = ClientFactory::from_settings(&settings, asker)?;
//! let client = factory.get_spaced_client().await?;
//! let environments = client.environments().get_all().await?;
//! println!("Working in {}", factory.get_active_space().map_or("?", |s| s.name.as_str()));
//! ```
//!
use crate::api::{ApiClient, Space};
use crate::common::ui::prompts::{self, Asker};
use crate::core::config::{self, Settings};
use crate::core::error::{OctoError, Result};
use std::time::Duration;
use tracing::{debug, info, instrument};
use url::Url;

const SELECT_SPACE_MESSAGE: &str = "You have not specified a Space. Please select one:";
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

pub struct ClientFactory {
    http: reqwest::Client,
    api_url: Url,
    api_key: String,
    /// Requested space name or ID; empty when none was given.
    space_name_or_id: String,
    /// Lazily created; `None` once a space-scoped client takes over.
    system_client: Option<ApiClient>,
    space_scoped_client: Option<ApiClient>,
    active_space: Option<Space>,
    /// `None` means no-prompt mode.
    asker: Option<Box<dyn Asker>>,
}

impl ClientFactory {
    pub fn new(
        http: reqwest::Client,
        host: &str,
        api_key: &str,
        space_name_or_id: &str,
        asker: Option<Box<dyn Asker>>,
    ) -> Result<Self> {
        let api_url = Url::parse(host.trim()).map_err(|e| OctoError::InvalidHost {
            host: host.to_string(),
            reason: e.to_string(),
        })?;
        Ok(ClientFactory {
            http,
            api_url,
            api_key: api_key.to_string(),
            space_name_or_id: space_name_or_id.trim().to_string(),
            system_client: None,
            space_scoped_client: None,
            active_space: None,
            asker,
        })
    }

    /// Builds a factory from resolved settings, requiring host and API key.
    pub fn from_settings(settings: &Settings, asker: Option<Box<dyn Asker>>) -> Result<Self> {
        config::validate_mandatory(settings.host.as_deref(), settings.api_key.as_deref())?;
        let http = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .user_agent(concat!("octopus-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(OctoError::from)?;
        Self::new(
            http,
            settings.host.as_deref().unwrap_or_default(),
            settings.api_key.as_deref().unwrap_or_default(),
            settings.space.as_deref().unwrap_or_default(),
            asker,
        )
    }

    pub fn is_prompt_enabled(&self) -> bool {
        self.asker.is_some()
    }

    pub fn asker(&self) -> Option<&dyn Asker> {
        self.asker.as_deref()
    }

    /// The resolved space, or `None` before `get_spaced_client` has succeeded.
    pub fn get_active_space(&self) -> Option<&Space> {
        self.active_space.as_ref()
    }

    /// Replaces the requested space and drops every cached handle, so the next
    /// `get_spaced_client` looks the space up again.
    pub fn set_space_name_or_id(&mut self, space_name_or_id: &str) {
        debug!("Space changed to '{}', clearing cached clients", space_name_or_id);
        self.system_client = None;
        self.space_scoped_client = None;
        self.active_space = None;
        self.space_name_or_id = space_name_or_id.trim().to_string();
    }

    /// A handle for space-independent calls. Returns the space-scoped handle
    /// when one has already been resolved.
    pub fn get_system_client(&mut self) -> Result<ApiClient> {
        if let Some(client) = &self.space_scoped_client {
            return Ok(client.clone());
        }
        if let Some(client) = &self.system_client {
            return Ok(client.clone());
        }
        let client = ApiClient::new(self.http.clone(), self.api_url.clone(), &self.api_key, None)?;
        self.system_client = Some(client.clone());
        Ok(client)
    }

    /// A handle bound to the requested (or interactively chosen) space.
    #[instrument(skip(self), fields(requested = %self.space_name_or_id))]
    pub async fn get_spaced_client(&mut self) -> Result<ApiClient> {
        if let Some(client) = &self.space_scoped_client {
            return Ok(client.clone());
        }

        let system_client = self.get_system_client()?;

        let space = if self.space_name_or_id.is_empty() {
            let Some(asker) = self.asker.as_deref() else {
                return Err(OctoError::SpaceRequired.into());
            };
            let mut all_spaces = system_client.spaces().get_all().await?;
            match all_spaces.len() {
                0 => return Err(OctoError::NoSpaces.into()),
                1 => all_spaces.remove(0),
                _ => prompts::select_map(asker, SELECT_SPACE_MESSAGE, &all_spaces, |s| {
                    s.name.clone()
                })?
                .clone(),
            }
        } else {
            let all_spaces = system_client.spaces().get_all().await?;
            find_space(&all_spaces, &self.space_name_or_id)
                .cloned()
                .ok_or_else(|| OctoError::NotFound {
                    kind: "space",
                    name: self.space_name_or_id.clone(),
                })?
        };

        info!("Using space '{}' ({})", space.name, space.id);
        let scoped_client = ApiClient::new(
            self.http.clone(),
            self.api_url.clone(),
            &self.api_key,
            Some(&space.id),
        )?;
        self.space_name_or_id = space.id.clone();
        self.active_space = Some(space);
        self.space_scoped_client = Some(scoped_client.clone());
        // The scoped client covers system calls too.
        self.system_client = None;
        Ok(scoped_client)
    }
}

/// Finds the space whose name matches `name_or_id`, else the one whose ID does.
/// Both comparisons ignore case.
pub fn find_space<'a>(spaces: &'a [Space], name_or_id: &str) -> Option<&'a Space> {
    spaces
        .iter()
        .find(|s| eq_fold(&s.name, name_or_id))
        .or_else(|| spaces.iter().find(|s| eq_fold(&s.id, name_or_id)))
}

/// Case-insensitive string comparison (Unicode aware).
pub fn eq_fold(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}
