//! # Spaces Resource
//!
//! File: cli/src/api/spaces.rs
//!
//! Spaces are server-wide, so these calls work through a system-scoped handle.
//!
use super::client::ApiClient;
use crate::core::error::Result;
use serde::{Deserialize, Serialize};

/// A multi-tenant partition on the Octopus server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Space {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub task_queue_stopped: bool,
}

pub struct Spaces<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn spaces(&self) -> Spaces<'_> {
        Spaces { client: self }
    }
}

impl Spaces<'_> {
    /// Lists every space visible to the API key.
    pub async fn get_all(&self) -> Result<Vec<Space>> {
        let url = self.client.system_url("spaces/all")?;
        self.client.get_json(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use url::Url;

    #[tokio::test]
    async fn test_get_all_parses_spaces() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/spaces/all");
            then.status(200).json_body(json!([
                {
                    "Id": "Spaces-1",
                    "Name": "Default",
                    "Description": "",
                    "IsDefault": true,
                    "TaskQueueStopped": false,
                    "SpaceManagersTeams": ["teams-administrators"]
                },
                { "Id": "Spaces-2", "Name": "Integrations" }
            ]));
        });

        let client = ApiClient::new(
            reqwest::Client::new(),
            Url::parse(&server.base_url()).unwrap(),
            "API-TESTKEY",
            None,
        )
        .unwrap();
        let spaces = client.spaces().get_all().await.unwrap();

        mock.assert();
        assert_eq!(spaces.len(), 2);
        assert_eq!(spaces[0].id, "Spaces-1");
        assert!(spaces[0].is_default);
        assert_eq!(spaces[1].name, "Integrations");
        assert!(spaces[1].description.is_none());
    }
}
