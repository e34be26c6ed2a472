//! Paged response envelope
//!
//! Mirrors the JSON shape returned by the list endpoints:
//! `_links`, `page` and `_embedded`.

use crate::error::{Error, Result};
use crate::types::Document;
use serde::{Deserialize, Deserializer, Serialize};

/// Pagination refuses to go further once `page.size * page.number` reaches this
pub const MAX_PAGE_DEPTH: u64 = 1000;

/// Decode `null` as the type's default, the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A link to another resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    /// Target, usually relative to the API host
    #[serde(deserialize_with = "null_as_default")]
    pub href: String,
    /// Whether `href` contains RFC 6570 template expressions
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub templated: bool,
}

impl Link {
    /// Create a plain link
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            templated: false,
        }
    }

    /// A link with an empty href points nowhere
    pub fn is_empty(&self) -> bool {
        self.href.is_empty()
    }
}

/// Navigation links of a paged response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_link: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<Link>,
}

impl Links {
    /// The `next` link, if present and non-empty
    pub fn next(&self) -> Option<&Link> {
        self.next.as_ref().filter(|l| !l.is_empty())
    }

    /// The `prev` link, if present and non-empty
    pub fn prev(&self) -> Option<&Link> {
        self.prev.as_ref().filter(|l| !l.is_empty())
    }
}

/// Position of a response within the full result set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Page {
    /// Page size
    #[serde(deserialize_with = "null_as_default")]
    pub size: u64,
    /// Number of results across all pages
    #[serde(deserialize_with = "null_as_default")]
    pub total_elements: u64,
    /// Number of pages
    #[serde(deserialize_with = "null_as_default")]
    pub total_pages: u64,
    /// Zero-based page number
    #[serde(deserialize_with = "null_as_default")]
    pub number: u64,
}

impl Page {
    /// Depth counter checked against [`MAX_PAGE_DEPTH`]
    pub fn depth(&self) -> u64 {
        self.size.saturating_mul(self.number)
    }

    /// True when this is the last page the server reported
    pub fn is_last(&self) -> bool {
        self.number.saturating_add(1) >= self.total_pages
    }
}

/// Result collections of a paged response
///
/// Only the collection matching the endpoint is populated; the others stay empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Embedded {
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub events: Vec<Document>,
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub venues: Vec<Document>,
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub attractions: Vec<Document>,
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub classifications: Vec<Document>,
}

impl Embedded {
    /// Total number of documents across all collections
    pub fn len(&self) -> usize {
        self.events.len() + self.venues.len() + self.attractions.len() + self.classifications.len()
    }

    /// True when every collection is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A page of results from a list endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PagedResponse {
    #[serde(rename = "_links", default, deserialize_with = "null_as_default")]
    pub links: Links,
    #[serde(default, deserialize_with = "null_as_default")]
    pub page: Page,
    #[serde(rename = "_embedded", default, deserialize_with = "null_as_default")]
    pub embedded: Embedded,
}

impl PagedResponse {
    /// True when the server reported a `next` link
    pub fn has_next(&self) -> bool {
        self.links.next().is_some()
    }

    /// True when the server reported a `prev` link
    pub fn has_prev(&self) -> bool {
        self.links.prev().is_some()
    }

    /// Depth counter of this page (`page.size * page.number`)
    pub fn depth(&self) -> u64 {
        self.page.depth()
    }

    /// True when the response carries no documents
    pub fn is_empty(&self) -> bool {
        self.embedded.is_empty()
    }

    /// Fail with `DepthLimitExceeded` once the depth counter reaches the limit
    pub fn check_depth(&self) -> Result<()> {
        let depth = self.depth();
        if depth >= MAX_PAGE_DEPTH {
            return Err(Error::DepthLimitExceeded { depth });
        }
        Ok(())
    }
}
