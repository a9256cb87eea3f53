//! Analysis service endpoint selection.
//!
//! The endpoint is resolved once at startup and handed to the client; nothing
//! downstream inspects host names again.

use std::fmt;
use std::time::Duration;

use crate::error::{ClaimError, ClaimResult};

/// Development server started by the analysis service's `app.py`.
pub const LOCAL_BASE_URL: &str = "http://localhost:5000";

/// Hosted analysis service.
pub const PRODUCTION_BASE_URL: &str = "https://claimforge-api.onrender.com";

/// Hosts that select the local development endpoint.
const LOCAL_HOSTS: &[&str] = &["localhost", "127.0.0.1"];

/// Where claims are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Local,
    Production,
    Custom(String),
}

impl Endpoint {
    /// Pick the endpoint for the host the client is running against.
    pub fn for_host(host: &str) -> Self {
        if LOCAL_HOSTS.contains(&host.trim()) {
            Self::Local
        } else {
            Self::Production
        }
    }

    /// An explicit base URL, e.g. from `CLAIMFORGE_API_URL`.
    pub fn custom(url: &str) -> ClaimResult<Self> {
        let url = url.trim().trim_end_matches('/');
        if url.is_empty() {
            return Err(ClaimError::config("API URL is empty"));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ClaimError::config(format!(
                "API URL must start with http:// or https://, got '{}'",
                url
            )));
        }
        Ok(Self::Custom(url.to_string()))
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        match self {
            Self::Local => LOCAL_BASE_URL,
            Self::Production => PRODUCTION_BASE_URL,
            Self::Custom(url) => url,
        }
    }

    pub fn analyze_url(&self) -> String {
        format!("{}/analyze", self.base_url())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base_url())
    }
}

/// Client settings resolved at startup.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: Endpoint,
    /// `None` waits for the server indefinitely.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resolve from an explicit URL if given, otherwise from the origin host.
    ///
    /// With neither, the production endpoint is used.
    pub fn resolve(api_url: Option<&str>, origin_host: Option<&str>) -> ClaimResult<Self> {
        let endpoint = match (api_url, origin_host) {
            (Some(url), _) => Endpoint::custom(url)?,
            (None, Some(host)) => Endpoint::for_host(host),
            (None, None) => Endpoint::Production,
        };
        Ok(Self::new(endpoint))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(Endpoint::Production)
    }
}
