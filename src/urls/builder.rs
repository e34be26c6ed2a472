//! URL construction and redaction
//!
//! Pure string/URL manipulation; nothing here touches the network.

use super::params::QueryParams;
use crate::error::{Error, Result};
use std::borrow::Cow;
use url::Url;

/// Query parameter carrying the API key
pub const API_KEY_PARAM: &str = "apikey";

/// Placeholder written over the API key by [`redact_url`]
pub const REDACTED: &str = "REDACTED";

/// Parse a base URL, rejecting URLs that cannot take path segments
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| Error::invalid_url(raw, e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(Error::invalid_url(raw, "URL cannot be used as a base"));
    }
    Ok(url)
}

/// Append path segments to `base` and attach the API key
///
/// Segments are percent-encoded individually, so an identifier containing `/`
/// stays a single segment.
///
/// ```
/// use discovery_client::urls::{endpoint_url, parse_base_url};
///
/// let base = parse_base_url("https://api.example.com/discovery/v2").unwrap();
/// let url = endpoint_url(&base, &["events", "G5v0Z9"], Some("secret")).unwrap();
/// assert_eq!(
///     url.as_str(),
///     "https://api.example.com/discovery/v2/events/G5v0Z9?apikey=secret"
/// );
/// ```
pub fn endpoint_url(base: &Url, segments: &[&str], api_key: Option<&str>) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| Error::invalid_url(base.as_str(), "URL cannot be used as a base"))?
        .pop_if_empty()
        .extend(segments);
    Ok(with_api_key(url, api_key))
}

/// Add every non-empty field of `params` to the query of `url`, plus the API key
///
/// Pairs already present on `url` are kept; an existing `apikey` is replaced.
pub fn apply_query(url: Url, params: &QueryParams, api_key: Option<&str>) -> Url {
    let mut pairs = existing_pairs(&url);
    pairs.extend(
        params
            .pairs()
            .into_iter()
            .map(|(name, value)| (name.to_string(), value.to_string())),
    );
    if let Some(key) = api_key.filter(|k| !k.is_empty()) {
        pairs.push((API_KEY_PARAM.to_string(), key.to_string()));
    }
    write_sorted_query(url, pairs)
}

/// Set (or replace) the `apikey` query parameter
///
/// A missing or empty key leaves the URL untouched.
pub fn with_api_key(url: Url, api_key: Option<&str>) -> Url {
    match api_key.filter(|k| !k.is_empty()) {
        Some(key) => {
            let mut pairs = existing_pairs(&url);
            pairs.push((API_KEY_PARAM.to_string(), key.to_string()));
            write_sorted_query(url, pairs)
        }
        None => url,
    }
}

/// Resolve a server-supplied link against `base` and attach the API key
///
/// Links marked as templated carry RFC 6570 expressions such as `{&sort}`;
/// those are dropped before resolution.
pub fn resolve_link(
    base: &Url,
    href: &str,
    templated: bool,
    api_key: Option<&str>,
) -> Result<Url> {
    let href: Cow<'_, str> = if templated {
        Cow::Owned(strip_template(href))
    } else {
        Cow::Borrowed(href)
    };
    let url = base
        .join(&href)
        .map_err(|e| Error::invalid_url(&*href, e.to_string()))?;
    Ok(with_api_key(url, api_key))
}

/// Render `url` with the API key replaced by [`REDACTED`]
///
/// URLs without an `apikey` parameter are returned exactly as they are.
pub fn redact_url(url: &Url) -> String {
    if !url.query_pairs().any(|(name, _)| name == API_KEY_PARAM) {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| {
            let value = if name == API_KEY_PARAM {
                REDACTED.to_string()
            } else {
                value.into_owned()
            };
            (name.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

/// Query pairs of `url`, minus any API key
fn existing_pairs(url: &Url) -> Vec<(String, String)> {
    url.query_pairs()
        .filter(|(name, _)| name != API_KEY_PARAM)
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect()
}

/// Replace the query of `url` with `pairs`, stably sorted by name
fn write_sorted_query(mut url: Url, mut pairs: Vec<(String, String)>) -> Url {
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    if pairs.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(pairs);
    }
    url
}

/// Drop `{...}` template expressions from a link
fn strip_template(href: &str) -> String {
    let mut out = String::with_capacity(href.len());
    let mut depth = 0usize;
    for c in href.chars() {
        match c {
            '{' => depth += 1,
            '}' if depth > 0 => depth -= 1,
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}
