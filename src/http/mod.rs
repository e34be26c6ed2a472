//! HTTP client module
//!
//! Issues one GET per call and turns the response into a typed result.
//!
//! # Behavior
//!
//! - **Single attempt**: no retries, no backoff; every failure surfaces at once
//! - **Strict status**: anything other than `200 OK` is an `UnexpectedStatus`
//! - **Whole-body decode**: the body is read fully, then decoded; a decode
//!   failure discards the response
//! - **Redacted logging**: request URLs are logged with the API key masked

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};

#[cfg(test)]
mod tests;
