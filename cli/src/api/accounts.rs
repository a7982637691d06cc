//! # Accounts Resource
//!
//! File: cli/src/api/accounts.rs
//!
//! ## Overview
//!
//! Accounts hold credentials Octopus uses during deployments. The CLI lists
//! accounts of every type and creates SSH key-pair accounts.
//!
//! Secrets travel as *sensitive values* (`{"HasValue": true, "NewValue": "..."}`);
//! the server never returns `NewValue` back.
//!
use super::client::ApiClient;
use crate::core::error::Result;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

pub const SSH_KEY_PAIR: &str = "SshKeyPair";
const UNTENANTED: &str = "Untenanted";

/// Write-only secret in the Octopus wire format.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct SensitiveValue {
    pub has_value: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_value: Option<String>,
}

impl SensitiveValue {
    pub fn new(value: impl Into<String>) -> Self {
        SensitiveValue {
            has_value: true,
            new_value: Some(value.into()),
        }
    }
}

impl std::fmt::Debug for SensitiveValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SensitiveValue")
            .field("has_value", &self.has_value)
            .finish_non_exhaustive()
    }
}

/// Any account, as returned by the list endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub account_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub environment_ids: Vec<String>,
}

/// Request body for creating an SSH key-pair account.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SshKeyPairAccount {
    account_type: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub username: String,
    pub private_key_file: SensitiveValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key_passphrase: Option<SensitiveValue>,
    pub environment_ids: Vec<String>,
    tenanted_deployment_participation: &'static str,
    tenant_ids: Vec<String>,
    tenant_tags: Vec<String>,
}

impl SshKeyPairAccount {
    /// `private_key` is the raw key file content; it is base64-encoded here.
    pub fn new(name: &str, username: &str, private_key: &[u8]) -> Self {
        SshKeyPairAccount {
            account_type: SSH_KEY_PAIR,
            name: name.to_string(),
            description: String::new(),
            username: username.to_string(),
            private_key_file: SensitiveValue::new(STANDARD.encode(private_key)),
            private_key_passphrase: None,
            environment_ids: Vec::new(),
            tenanted_deployment_participation: UNTENANTED,
            tenant_ids: Vec::new(),
            tenant_tags: Vec::new(),
        }
    }
}

pub struct Accounts<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn accounts(&self) -> Accounts<'_> {
        Accounts { client: self }
    }
}

impl Accounts<'_> {
    pub async fn get_all(&self) -> Result<Vec<Account>> {
        let url = self.client.space_url("accounts/all")?;
        self.client.get_json(url).await
    }

    /// Creates the account and returns the server's copy (with its new ID).
    pub async fn add_ssh_key_pair(&self, account: &SshKeyPairAccount) -> Result<Account> {
        let url = self.client.space_url("accounts")?;
        self.client.post_json(url, account).await
    }
}
