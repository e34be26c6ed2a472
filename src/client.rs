//! Discovery API client
//!
//! Ties the URL builder, the HTTP client and the paged envelope together.
//! The client holds only read-only configuration; every call is one
//! independent GET.

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::HttpClient;
use crate::pagination::{Link, PagedResponse};
use crate::types::Document;
use crate::urls::{apply_query, endpoint_url, parse_base_url, resolve_link, QueryParams};
use std::fmt;
use tracing::info;
use url::Url;

const EVENTS: &str = "events";
const VENUES: &str = "venues";
const ATTRACTIONS: &str = "attractions";
const CLASSIFICATIONS: &str = "classifications";

/// Client for the discovery API
#[derive(Clone)]
pub struct DiscoveryClient {
    base_url: Url,
    api_key: Option<String>,
    http: HttpClient,
}

impl DiscoveryClient {
    /// Create a client from a config
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let base_url = parse_base_url(&config.base_url)?;
        let http = HttpClient::with_config(config.http_client_config())?;

        info!(
            "Discovery client for {} (api key {})",
            base_url,
            if config.api_key().is_some() { "set" } else { "not set" }
        );

        Ok(Self {
            base_url,
            api_key: config.api_key().map(str::to_string),
            http,
        })
    }

    /// Base URL every request is derived from
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether requests carry an API key
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    // ========================================================================
    // URLs
    // ========================================================================

    /// URL of a top-level resource collection, with the API key attached
    pub fn resource_url(&self, segment: &str) -> Result<Url> {
        endpoint_url(&self.base_url, &[segment], self.api_key())
    }

    /// URL of the events endpoint
    pub fn events_url(&self) -> Result<Url> {
        self.resource_url(EVENTS)
    }

    /// URL of the venues endpoint
    pub fn venues_url(&self) -> Result<Url> {
        self.resource_url(VENUES)
    }

    /// URL of the attractions endpoint
    pub fn attractions_url(&self) -> Result<Url> {
        self.resource_url(ATTRACTIONS)
    }

    /// URL of the classifications endpoint
    pub fn classifications_url(&self) -> Result<Url> {
        self.resource_url(CLASSIFICATIONS)
    }

    /// URL of a collection filtered by `params`
    pub fn search_url(&self, segment: &str, params: &QueryParams) -> Result<Url> {
        let url = endpoint_url(&self.base_url, &[segment], None)?;
        Ok(apply_query(url, params, self.api_key()))
    }

    // ========================================================================
    // Request/decode
    // ========================================================================

    /// GET `url` and decode the body as an open JSON document
    pub async fn fetch_document(&self, url: &Url) -> Result<Document> {
        self.http.get_document(url).await
    }

    /// GET `url` and decode the body as a paged response
    pub async fn fetch_page(&self, url: &Url) -> Result<PagedResponse> {
        self.http.get_json(url).await
    }

    /// Resolve a server-supplied link and fetch the page it points at
    pub async fn follow_link(&self, link: &Link) -> Result<PagedResponse> {
        let url = resolve_link(&self.base_url, &link.href, link.templated, self.api_key())?;
        self.fetch_page(&url).await
    }

    // ========================================================================
    // Single-resource lookups
    // ========================================================================

    /// Fetch an event by its identifier
    pub async fn get_event(&self, id: &str) -> Result<Document> {
        self.get_resource(EVENTS, id).await
    }

    /// Fetch a venue by its identifier
    pub async fn get_venue(&self, id: &str) -> Result<Document> {
        self.get_resource(VENUES, id).await
    }

    /// Fetch an attraction by its identifier
    pub async fn get_attraction(&self, id: &str) -> Result<Document> {
        self.get_resource(ATTRACTIONS, id).await
    }

    async fn get_resource(&self, segment: &str, id: &str) -> Result<Document> {
        let url = endpoint_url(&self.base_url, &[segment, id], self.api_key())?;
        self.fetch_document(&url).await
    }

    // ========================================================================
    // Searches
    // ========================================================================

    /// Search events
    pub async fn search_events(&self, params: &QueryParams) -> Result<PagedResponse> {
        self.search(EVENTS, params).await
    }

    /// Search venues
    pub async fn search_venues(&self, params: &QueryParams) -> Result<PagedResponse> {
        self.search(VENUES, params).await
    }

    /// Search attractions
    pub async fn search_attractions(&self, params: &QueryParams) -> Result<PagedResponse> {
        self.search(ATTRACTIONS, params).await
    }

    /// Search classifications
    pub async fn search_classifications(&self, params: &QueryParams) -> Result<PagedResponse> {
        self.search(CLASSIFICATIONS, params).await
    }

    async fn search(&self, segment: &str, params: &QueryParams) -> Result<PagedResponse> {
        let url = self.search_url(segment, params)?;
        self.fetch_page(&url).await
    }
}

impl fmt::Debug for DiscoveryClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscoveryClient")
            .field("base_url", &self.base_url.as_str())
            .field("has_api_key", &self.has_api_key())
            .field("http", &self.http)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(key: Option<&str>) -> DiscoveryClient {
        let mut config = ClientConfig::default().with_base_url("https://api.example.com/discovery/v2");
        config.api_key = key.map(str::to_string);
        DiscoveryClient::new(&config).unwrap()
    }

    #[test]
    fn test_events_url_with_key() {
        let url = client(Some("k3y")).events_url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/discovery/v2/events?apikey=k3y"
        );
    }

    #[test]
    fn test_venues_url_without_key() {
        let url = client(None).venues_url().unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/discovery/v2/venues");
    }

    #[test]
    fn test_search_url() {
        let params = QueryParams::new().keyword("jazz").page("0", "10");
        let url = client(Some("k3y")).search_url(EVENTS, &params).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/discovery/v2/events?apikey=k3y&keyword=jazz&page=0&size=10"
        );
    }

    #[test]
    fn test_new_rejects_bad_base_url() {
        let config = ClientConfig::new("k").with_base_url("not a url");
        assert!(matches!(
            DiscoveryClient::new(&config),
            Err(crate::Error::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_debug_hides_key() {
        let debug_str = format!("{:?}", client(Some("hunter2")));
        assert!(!debug_str.contains("hunter2"));
        assert!(debug_str.contains("has_api_key: true"));
    }
}
