//! # Octopus API Client Handle
//!
//! File: cli/src/api/client.rs
//!
//! ## Overview
//!
//! `ApiClient` is an authenticated handle on the Octopus REST API. A handle is
//! either *system-scoped* (no space; only server-wide routes such as
//! `/api/spaces/all`) or *space-scoped* (bound to one space ID; can reach both
//! server-wide and `/api/{spaceId}/...` routes).
//!
//! Handles are cheap to clone: the underlying `reqwest::Client` shares its
//! connection pool.
//!
//! Resource-specific calls live in sibling modules (`spaces`, `environments`,
//! `accounts`) and are reached through accessor methods:
//!
//! ```rust
//! let spaces = client.spaces().get_all().await?;
//! let environments = spaced_client.environments().get_all().await?;
//! ```
//!
use crate::core::error::{OctoError, Result};
use reqwest::{header, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-Octopus-ApiKey";

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
    space_id: Option<String>,
}

// Manual impl keeps the API key out of debug logs.
impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("space_id", &self.space_id)
            .finish_non_exhaustive()
    }
}

/// Error document returned by the Octopus server on failed requests.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct ErrorDocument {
    error_message: String,
    #[serde(default)]
    errors: Vec<String>,
}

impl ApiClient {
    /// Creates a handle. `space_id` of `None` yields a system-scoped handle.
    pub fn new(
        http: reqwest::Client,
        base_url: Url,
        api_key: &str,
        space_id: Option<&str>,
    ) -> Result<ApiClient> {
        if api_key.trim().is_empty() {
            return Err(OctoError::Validation("API key cannot be empty".into()).into());
        }
        Ok(ApiClient {
            http,
            base_url,
            api_key: api_key.to_string(),
            space_id: space_id.map(str::to_string),
        })
    }

    /// The space this handle is bound to, if any.
    pub fn space_id(&self) -> Option<&str> {
        self.space_id.as_deref()
    }

    /// Builds the URL for a server-wide route, e.g. `spaces/all`.
    pub(crate) fn system_url(&self, route: &str) -> Result<Url> {
        self.join(&format!("api/{route}"))
    }

    /// Builds the URL for a route inside the bound space, e.g. `environments/all`.
    pub(crate) fn space_url(&self, route: &str) -> Result<Url> {
        let space_id = self
            .space_id
            .as_deref()
            .ok_or_else(|| OctoError::NotSpaceScoped {
                route: route.to_string(),
            })?;
        self.join(&format!("api/{space_id}/{route}"))
    }

    fn join(&self, path: &str) -> Result<Url> {
        // Keep any path prefix on the host (e.g. https://example/octopus/).
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        base.join(path).map_err(|e| {
            OctoError::InvalidHost {
                host: self.base_url.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http
            .request(method, url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(header::ACCEPT, "application/json")
    }

    #[instrument(skip(self), fields(space = ?self.space_id))]
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!("GET {}", url);
        let response = self
            .request(Method::GET, url)
            .send()
            .await
            .map_err(OctoError::from)?;
        let response = check_status(response).await?;
        Ok(response.json::<T>().await.map_err(OctoError::from)?)
    }

    #[instrument(skip(self, body), fields(space = ?self.space_id))]
    pub(crate) async fn post_json<B, T>(&self, url: Url, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("POST {}", url);
        let response = self
            .request(Method::POST, url)
            .json(body)
            .send()
            .await
            .map_err(OctoError::from)?;
        let response = check_status(response).await?;
        Ok(response.json::<T>().await.map_err(OctoError::from)?)
    }

    #[instrument(skip(self), fields(space = ?self.space_id))]
    pub(crate) async fn delete(&self, url: Url) -> Result<()> {
        debug!("DELETE {}", url);
        let response = self
            .request(Method::DELETE, url)
            .send()
            .await
            .map_err(OctoError::from)?;
        check_status(response).await?;
        Ok(())
    }
}

/// Turns a non-2xx response into `OctoError::Api`.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let bytes = response.bytes().await.map_err(OctoError::from)?;
    let message = match serde_json::from_slice::<ErrorDocument>(&bytes) {
        Ok(doc) if doc.errors.is_empty() => doc.error_message,
        Ok(doc) => format!("{} ({})", doc.error_message, doc.errors.join("; ")),
        Err(_) => {
            let text = String::from_utf8_lossy(&bytes).trim().to_string();
            if text.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            } else {
                text
            }
        }
    };
    Err(OctoError::Api {
        status: status.as_u16(),
        message,
    }
    .into())
}
