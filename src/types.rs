//! Common types used throughout the discovery client
//!
//! Shared type aliases for the loosely-typed JSON documents the API returns.

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// A single resource as returned by the API (event, venue, attraction, ...)
///
/// The schema belongs to the remote service, so documents stay open maps.
pub type Document = JsonObject;
