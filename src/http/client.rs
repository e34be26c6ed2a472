//! HTTP client for the discovery API
//!
//! Provides a thin wrapper over `reqwest` that handles:
//! - Status checking (only `200 OK` is a success)
//! - Response body decoding into typed values or open JSON documents
//! - Logging with the API key redacted

use crate::error::{Error, Result};
use crate::types::Document;
use crate::urls::redact_url;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Headers sent with every request (`http.headers` in the YAML config)
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
            user_agent: format!("discovery-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// GET-only HTTP client
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client, config })
    }

    /// GET `url` and return the body of a `200 OK` response
    ///
    /// The response is consumed on every path, so its connection is released
    /// whether the call succeeds or not.
    pub async fn get_text(&self, url: &Url) -> Result<String> {
        let shown = redact_url(url);
        debug!("Querying: {}", shown);

        let mut req = self.client.get(url.clone());
        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        let response = req.send().await.map_err(|e| {
            let e = e.without_url();
            warn!("Request to {} failed: {}", shown, e);
            Error::Network(e)
        })?;

        let status = response.status();
        debug!("Status code: {}", status.as_u16());

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!("Unexpected status {} from {}", status.as_u16(), shown);
            return Err(Error::unexpected_status(status.as_u16(), body));
        }

        Ok(response.text().await?)
    }

    /// GET `url` and decode the body into `T`
    pub async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T> {
        let body = self.get_text(url).await?;
        serde_json::from_str(&body).map_err(|e| {
            warn!("Failed to decode response from {}: {}", redact_url(url), e);
            Error::decode(e.to_string())
        })
    }

    /// GET `url` and decode the body as an open JSON object
    pub async fn get_document(&self, url: &Url) -> Result<Document> {
        self.get_json(url).await
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
