//! CLI module
//!
//! Command-line front end for ad-hoc queries against the discovery API.
//!
//! # Commands
//!
//! - `event`, `venue`, `attraction` - Fetch one resource by identifier
//! - `events`, `venues`, `attractions` - Search and print pages of results

mod commands;
mod runner;

pub use commands::{Cli, Commands, SearchArgs};
pub use runner::Runner;

use tracing_subscriber::EnvFilter;

/// Log filter for the binary
///
/// `env` is the value of `RUST_LOG`. When it is unset, empty or unparsable the
/// filter defaults to `info`; `--verbose` always raises the global level to
/// `debug`.
pub fn log_filter(verbose: bool, env: Option<&str>) -> EnvFilter {
    let filter = env
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    if verbose {
        filter.add_directive(tracing::Level::DEBUG.into())
    } else {
        filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults_to_info() {
        assert_eq!(log_filter(false, None).to_string(), "info");
        assert_eq!(log_filter(false, Some("")).to_string(), "info");
    }

    #[test]
    fn test_log_filter_respects_rust_log() {
        assert_eq!(log_filter(false, Some("warn")).to_string(), "warn");

        let filter = log_filter(false, Some("discovery_client=trace")).to_string();
        assert!(filter.contains("discovery_client=trace"));
        assert!(!filter.contains("info"));
    }

    #[test]
    fn test_log_filter_verbose_raises_to_debug() {
        assert!(log_filter(true, None).to_string().contains("debug"));
        assert!(log_filter(true, Some("warn")).to_string().contains("debug"));
    }
}
