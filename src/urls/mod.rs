//! URL builder module
//!
//! Composes request URLs for the discovery API and masks the API key for logging.
//!
//! # Overview
//!
//! Every request URL is derived from the configured base URL: either by
//! appending path segments (`/events`, `/events/{id}`), by applying a set of
//! [`QueryParams`], or by resolving a server-supplied pagination link. In all
//! three cases the API key is attached as the `apikey` query parameter when one
//! is configured, and query pairs are written sorted by name.

mod builder;
mod params;

pub use builder::{
    apply_query, endpoint_url, parse_base_url, redact_url, resolve_link, with_api_key,
    API_KEY_PARAM, REDACTED,
};
pub use params::QueryParams;
