//! # Environments Resource
//!
//! File: cli/src/api/environments.rs
//!
//! Environments live inside a space; every call needs a space-scoped handle.
//!
use super::client::ApiClient;
use crate::core::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Environment {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub use_guided_failure: bool,
    #[serde(default)]
    pub allow_dynamic_infrastructure: bool,
    #[serde(default)]
    pub space_id: Option<String>,
}

pub struct Environments<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn environments(&self) -> Environments<'_> {
        Environments { client: self }
    }
}

impl Environments<'_> {
    pub async fn get_all(&self) -> Result<Vec<Environment>> {
        let url = self.client.space_url("environments/all")?;
        self.client.get_json(url).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let url = self.client.space_url(&format!("environments/{id}"))?;
        self.client.delete(url).await
    }
}
