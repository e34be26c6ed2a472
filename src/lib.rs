#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

//! # discovery-client
//!
//! A client for an event-ticketing discovery REST API: build query URLs,
//! GET them, decode the JSON, and follow the `next`/`prev` links the server
//! puts in paged responses.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use discovery_client::{ClientConfig, DiscoveryClient, QueryParams, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = DiscoveryClient::new(&ClientConfig::new("my-api-key"))?;
//!
//!     // One resource by id, as an open JSON document
//!     let event = client.get_event("G5vYZ9v1AeEjz").await?;
//!     println!("{}", event["name"]);
//!
//!     // A search, page by page
//!     let mut page = client
//!         .search_events(&QueryParams::new().keyword("jazz").page("0", "20"))
//!         .await?;
//!     while let Some(next) = page.next_page(&client).await? {
//!         page = next;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      DiscoveryClient                        │
//! │  get_event(id) → Document    search_events(q) → PagedResponse│
//! └─────────────────────────────────────────────────────────────┘
//!                │                                 │
//! ┌──────────────┴──────┬───────────────┬─────────┴───────────┐
//! │        URLs         │     HTTP      │     Pagination      │
//! ├─────────────────────┼───────────────┼─────────────────────┤
//! │ endpoint + segment  │ GET           │ _links next/prev    │
//! │ QueryParams         │ 200 check     │ depth guard (1000)  │
//! │ apikey + redaction  │ JSON decode   │                     │
//! └─────────────────────┴───────────────┴─────────────────────┘
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// URL building and API key redaction
pub mod urls;

/// HTTP client
pub mod http;

/// Paged responses and link navigation
pub mod pagination;

/// Discovery API client
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::DiscoveryClient;
pub use config::{ClientConfig, DEFAULT_API_URL};
pub use error::{Error, Result};
pub use pagination::{Direction, PagedResponse};
pub use types::Document;
pub use urls::{redact_url, QueryParams};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
