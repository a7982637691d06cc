//! # Octopus CLI Resource Selectors
//!
//! File: cli/src/common/selectors.rs
//!
//! Helpers that turn what the user typed or picked into server IDs. Names are
//! matched before IDs, ignoring case, the same rule the client factory uses for
//! spaces.
//!
use crate::api::environments::Environment;
use crate::api::ApiClient;
use crate::common::ui::prompts::Asker;
use crate::core::error::{OctoError, Result};
use crate::core::factory::eq_fold;
use tracing::debug;

/// Finds the environment whose name matches `name_or_id`, else the one whose ID does.
pub fn find_environment<'a>(
    environments: &'a [Environment],
    name_or_id: &str,
) -> Option<&'a Environment> {
    environments
        .iter()
        .find(|e| eq_fold(&e.name, name_or_id))
        .or_else(|| environments.iter().find(|e| eq_fold(&e.id, name_or_id)))
}

/// Maps `names_or_ids` onto environment IDs, preserving order.
///
/// # Errors
///
/// `OctoError::NotFound` naming the first entry that matches nothing.
pub fn resolve_environment_ids(
    environments: &[Environment],
    names_or_ids: &[String],
) -> Result<Vec<String>> {
    names_or_ids
        .iter()
        .map(|wanted| {
            find_environment(environments, wanted)
                .map(|e| e.id.clone())
                .ok_or_else(|| {
                    OctoError::NotFound {
                        kind: "environment",
                        name: wanted.clone(),
                    }
                    .into()
                })
        })
        .collect()
}

/// Fetches the space's environments and resolves `names_or_ids` against them.
pub async fn resolve_environment_names(
    client: &ApiClient,
    names_or_ids: &[String],
) -> Result<Vec<String>> {
    if names_or_ids.is_empty() {
        return Ok(Vec::new());
    }
    let environments = client.environments().get_all().await?;
    let ids = resolve_environment_ids(&environments, names_or_ids)?;
    debug!("Resolved environments {:?} to {:?}", names_or_ids, ids);
    Ok(ids)
}

/// Offers every environment in the space and returns the IDs picked.
pub async fn environments_multi_select(
    asker: &dyn Asker,
    client: &ApiClient,
    message: &str,
) -> Result<Vec<String>> {
    let environments = client.environments().get_all().await?;
    let names: Vec<String> = environments.iter().map(|e| e.name.clone()).collect();
    let picked = asker.multi_select(message, &names)?;
    picked
        .into_iter()
        .map(|index| {
            environments
                .get(index)
                .map(|e| e.id.clone())
                .ok_or_else(|| {
                    OctoError::Prompt(format!("selection {index} is out of range")).into()
                })
        })
        .collect()
}
