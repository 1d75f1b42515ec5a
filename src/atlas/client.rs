//! Atlas Client
//!
//! Main client for interacting with the Atlas API, combining credentials
//! and HTTP functionality.

use super::auth::{validate_path_segment, Credentials};
use super::data_lakes::DataLakes;
use super::http::AtlasHttpClient;
use crate::config::Config;
use crate::error::{AtlasError, Result};
use std::time::Duration;
use url::Url;

/// Public Atlas administration API root
pub const DEFAULT_BASE_URL: &str = "https://cloud.mongodb.com/api/atlas/v1.0";

/// Main Atlas client
#[derive(Clone, Debug)]
pub struct AtlasClient {
    pub credentials: Credentials,
    pub http: AtlasHttpClient,
    base_url: String,
}

impl AtlasClient {
    /// Create a new client against `base_url`
    pub fn new(base_url: &str, credentials: Credentials) -> Result<Self> {
        Self::with_http(base_url, credentials, AtlasHttpClient::new(None)?)
    }

    /// Create a client that reuses an existing transport
    pub fn with_http(base_url: &str, credentials: Credentials, http: AtlasHttpClient) -> Result<Self> {
        Ok(Self {
            credentials,
            http,
            base_url: normalize_base_url(base_url)?,
        })
    }

    /// Create a client from configuration (env > config file > defaults)
    pub fn from_config(config: &Config) -> Result<Self> {
        let credentials = Credentials::resolve(config.access_token.as_deref());
        let timeout = config.timeout_secs.map(Duration::from_secs);
        let http = AtlasHttpClient::new(timeout)?;
        Self::with_http(&config.effective_base_url(), credentials, http)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Bearer token for the current credentials
    pub fn token(&self) -> Option<&str> {
        self.credentials.token()
    }

    /// Data Lakes service
    pub fn data_lakes(&self) -> DataLakes<'_> {
        DataLakes::new(self)
    }

    // =========================================================================
    // URL helpers
    // =========================================================================

    /// Build an API URL from a path relative to the base URL
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Build a project-scoped collection URL: `/groups/{group_id}/{resource}`
    pub fn group_url(&self, group_id: &str, resource: &str) -> Result<String> {
        validate_path_segment("group id", group_id).map_err(AtlasError::InvalidRequest)?;
        Ok(self.api_url(&format!(
            "groups/{}/{}",
            urlencoding::encode(group_id),
            resource
        )))
    }

    /// Build a project-scoped item URL: `/groups/{group_id}/{resource}/{name}`
    pub fn group_resource_url(&self, group_id: &str, resource: &str, name: &str) -> Result<String> {
        validate_path_segment("resource name", name).map_err(AtlasError::InvalidRequest)?;
        let collection = self.group_url(group_id, resource)?;
        Ok(format!("{}/{}", collection, urlencoding::encode(name)))
    }
}

/// Validate a base URL and strip trailing slashes
fn normalize_base_url(base_url: &str) -> Result<String> {
    let parsed = Url::parse(base_url.trim())
        .map_err(|e| AtlasError::InvalidRequest(format!("invalid base URL '{}': {}", base_url, e)))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AtlasError::InvalidRequest(format!(
                "unsupported base URL scheme '{}'",
                other
            )))
        }
    }
    if parsed.cannot_be_a_base() {
        return Err(AtlasError::InvalidRequest(format!(
            "base URL '{}' cannot be used as a base",
            base_url
        )));
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
