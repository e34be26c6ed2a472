//! CLI commands and argument parsing

use crate::urls::QueryParams;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Discovery API command-line client
#[derive(Parser, Debug)]
#[command(name = "discovery")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// API key (overrides the config file)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Base URL (overrides the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Pretty-print JSON output
    #[arg(short, long, global = true)]
    pub pretty: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch an event by id
    Event {
        /// Event identifier
        id: String,
    },

    /// Fetch a venue by id
    Venue {
        /// Venue identifier
        id: String,
    },

    /// Fetch an attraction by id
    Attraction {
        /// Attraction identifier
        id: String,
    },

    /// Search events
    Events(SearchArgs),

    /// Search venues
    Venues(SearchArgs),

    /// Search attractions
    Attractions(SearchArgs),
}

/// Filters and paging for search commands
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Number of pages to print, following `next` links
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u64).range(1..))]
    pub pages: u64,

    #[arg(long)]
    pub id: Option<String>,
    #[arg(long)]
    pub sort: Option<String>,
    #[arg(long)]
    pub page: Option<String>,
    #[arg(long)]
    pub size: Option<String>,
    #[arg(long)]
    pub locale: Option<String>,
    #[arg(short, long)]
    pub keyword: Option<String>,
    #[arg(long)]
    pub include_test: Option<String>,
    #[arg(long)]
    pub include_tba: Option<String>,
    #[arg(long)]
    pub include_tbd: Option<String>,
    #[arg(long)]
    pub venue_id: Option<String>,
    #[arg(long)]
    pub start_date_time: Option<String>,
    #[arg(long)]
    pub end_date_time: Option<String>,
    #[arg(long)]
    pub country_code: Option<String>,
    #[arg(long)]
    pub state_code: Option<String>,
    #[arg(long)]
    pub attraction_id: Option<String>,
    #[arg(long)]
    pub segment_id: Option<String>,
    #[arg(long)]
    pub segment_name: Option<String>,
    #[arg(long)]
    pub classification_id: Option<String>,
    #[arg(long)]
    pub classification_name: Option<String>,
    #[arg(long)]
    pub market_id: Option<String>,
    #[arg(long)]
    pub promoter_id: Option<String>,
    #[arg(long)]
    pub dma_id: Option<String>,
    #[arg(long)]
    pub latlong: Option<String>,
    #[arg(long)]
    pub radius: Option<String>,
    #[arg(long)]
    pub unit: Option<String>,
}

impl SearchArgs {
    /// Convert the flags into query parameters
    pub fn to_params(&self) -> QueryParams {
        let v = |field: &Option<String>| field.clone().unwrap_or_default();
        QueryParams {
            id: v(&self.id),
            sort: v(&self.sort),
            page: v(&self.page),
            size: v(&self.size),
            locale: v(&self.locale),
            keyword: v(&self.keyword),
            include_test: v(&self.include_test),
            include_tba: v(&self.include_tba),
            include_tbd: v(&self.include_tbd),
            venue_id: v(&self.venue_id),
            start_date_time: v(&self.start_date_time),
            end_date_time: v(&self.end_date_time),
            country_code: v(&self.country_code),
            state_code: v(&self.state_code),
            attraction_id: v(&self.attraction_id),
            segment_id: v(&self.segment_id),
            segment_name: v(&self.segment_name),
            classification_id: v(&self.classification_id),
            classification_name: v(&self.classification_name),
            market_id: v(&self.market_id),
            promoter_id: v(&self.promoter_id),
            dma_id: v(&self.dma_id),
            latlong: v(&self.latlong),
            radius: v(&self.radius),
            unit: v(&self.unit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_events_search() {
        let cli = Cli::try_parse_from([
            "discovery",
            "--api-key",
            "k3y",
            "events",
            "--keyword",
            "jazz",
            "--country-code",
            "US",
            "--include-tba",
            "yes",
            "--pages",
            "3",
        ])
        .unwrap();

        assert_eq!(cli.api_key.as_deref(), Some("k3y"));
        match cli.command {
            Commands::Events(args) => {
                assert_eq!(args.pages, 3);
                let params = args.to_params();
                assert_eq!(params.keyword, "jazz");
                assert_eq!(params.country_code, "US");
                assert_eq!(params.include_tba, "yes");
                assert_eq!(
                    params.pairs(),
                    vec![("keyword", "jazz"), ("includeTBA", "yes"), ("countryCode", "US")]
                );
            }
            other => panic!("Expected Events, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_event_lookup() {
        let cli = Cli::try_parse_from(["discovery", "event", "G5v0Z9", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Event { ref id } if id == "G5v0Z9"));
    }

    #[test]
    fn test_pages_must_be_positive() {
        let err = Cli::try_parse_from(["discovery", "venues", "--pages", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);

        let cli = Cli::try_parse_from(["discovery", "venues"]).unwrap();
        assert!(matches!(cli.command, Commands::Venues(ref args) if args.pages == 1));
    }
}
