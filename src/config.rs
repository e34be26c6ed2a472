//! Client configuration
//!
//! The configuration is an immutable value: build it once (in code or from a
//! YAML file) and hand it to [`crate::DiscoveryClient::new`].
//!
//! ```yaml
//! base_url: "https://app.ticketmaster.com/discovery/v2"
//! api_key: "..."
//! http:
//!   timeout_seconds: 30
//!   user_agent: "my-app/1.0"
//!   headers:
//!     Accept-Language: "en-us"
//! ```

use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// Base URL of the public discovery API
pub const DEFAULT_API_URL: &str = "https://app.ticketmaster.com/discovery/v2";

// ============================================================================
// Client Config
// ============================================================================

/// Configuration for a [`crate::DiscoveryClient`]
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL for API requests
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key (consumer key), sent as the `apikey` query parameter
    #[serde(default)]
    pub api_key: Option<String>,

    /// HTTP transport settings
    #[serde(default)]
    pub http: HttpSettings,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            http: HttpSettings::default(),
        }
    }
}

impl ClientConfig {
    /// Config for the public API with the given key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    /// Use a different base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    ///
    /// The timeout is kept in whole seconds; any fraction rounds up, so
    /// `500ms` becomes `1s`. A zero duration is rejected by [`Self::validate`].
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let partial = u64::from(timeout.subsec_nanos() > 0);
        self.http.timeout_seconds = timeout.as_secs().saturating_add(partial);
        self
    }

    /// Parse a config from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Check the values that can be checked without a request
    pub fn validate(&self) -> Result<()> {
        crate::urls::parse_base_url(&self.base_url)?;
        if self.http.timeout_seconds == 0 {
            return Err(Error::config(
                "http.timeout_seconds must be at least 1 (a zero timeout would fail every request)",
            ));
        }
        Ok(())
    }

    /// The API key, treating an empty string as absent
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty())
    }

    /// Transport settings for [`crate::http::HttpClient`]
    pub fn http_client_config(&self) -> HttpClientConfig {
        let mut builder =
            HttpClientConfig::builder().timeout(Duration::from_secs(self.http.timeout_seconds));
        if let Some(agent) = &self.http.user_agent {
            builder = builder.user_agent(agent);
        }
        for (name, value) in &self.http.headers {
            builder = builder.header(name, value);
        }
        builder.build()
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key().map(|_| crate::urls::REDACTED))
            .field("http", &self.http)
            .finish()
    }
}

// ============================================================================
// HTTP Settings
// ============================================================================

/// HTTP transport settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Extra headers sent with every request
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            user_agent: None,
            headers: BTreeMap::new(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}
