//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, SearchArgs};
use crate::client::DiscoveryClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::pagination::PagedResponse;
use serde::Serialize;
use std::io::Write;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, printing results to stdout
    pub async fn run(&self) -> Result<()> {
        self.run_with_output(&mut std::io::stdout()).await
    }

    /// Run the CLI command, printing results to `out`
    pub async fn run_with_output<W: Write>(&self, out: &mut W) -> Result<()> {
        let client = DiscoveryClient::new(&self.load_config()?)?;

        match &self.cli.command {
            Commands::Event { id } => {
                let doc = client.get_event(id).await?;
                self.print(out, &doc)
            }
            Commands::Venue { id } => {
                let doc = client.get_venue(id).await?;
                self.print(out, &doc)
            }
            Commands::Attraction { id } => {
                let doc = client.get_attraction(id).await?;
                self.print(out, &doc)
            }
            Commands::Events(args) => {
                let first = client.search_events(&args.to_params()).await?;
                self.print_pages(out, &client, first, args).await
            }
            Commands::Venues(args) => {
                let first = client.search_venues(&args.to_params()).await?;
                self.print_pages(out, &client, first, args).await
            }
            Commands::Attractions(args) => {
                let first = client.search_attractions(&args.to_params()).await?;
                self.print_pages(out, &client, first, args).await
            }
        }
    }

    /// Build the client config from the config file and flag overrides
    fn load_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };

        if let Some(key) = &self.cli.api_key {
            config.api_key = Some(key.clone());
        }
        if let Some(base_url) = &self.cli.base_url {
            config.base_url = base_url.clone();
        }

        Ok(config)
    }

    /// Print `first` and up to `args.pages - 1` following pages
    async fn print_pages<W: Write>(
        &self,
        out: &mut W,
        client: &DiscoveryClient,
        first: PagedResponse,
        args: &SearchArgs,
    ) -> Result<()> {
        let mut current = first;
        let mut printed = 0;

        loop {
            self.print(out, &current)?;
            printed += 1;

            if printed >= args.pages {
                break;
            }
            match current.next_page(client).await? {
                Some(next) => current = next,
                None => break,
            }
        }

        info!(
            "Printed {} page(s), {} total result(s)",
            printed, current.page.total_elements
        );
        Ok(())
    }

    /// Write `value` as one JSON document
    fn print<W: Write, T: Serialize>(&self, out: &mut W, value: &T) -> Result<()> {
        if self.cli.pretty {
            serde_json::to_writer_pretty(&mut *out, value).map_err(std::io::Error::from)?;
        } else {
            serde_json::to_writer(&mut *out, value).map_err(std::io::Error::from)?;
        }
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use clap::Parser;
    use serde_json::{json, Value};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn runner(server: &MockServer, args: &[&str]) -> Runner {
        let base_url = format!("{}/discovery/v2", server.uri());
        let mut argv = vec!["discovery", "--api-key", "k3y", "--base-url", base_url.as_str()];
        argv.extend_from_slice(args);
        Runner::new(Cli::try_parse_from(argv).unwrap())
    }

    fn lines(out: &[u8]) -> Vec<Value> {
        String::from_utf8(out.to_vec())
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_event_command_prints_document() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/discovery/v2/events/abc"))
            .and(query_param("apikey", "k3y"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "abc"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut out = Vec::new();
        runner(&mock_server, &["event", "abc"])
            .run_with_output(&mut out)
            .await
            .unwrap();

        assert_eq!(lines(&out), vec![json!({"id": "abc"})]);
    }

    #[tokio::test]
    async fn test_events_command_follows_pages() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/discovery/v2/events"))
            .and(query_param("keyword", "jazz"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "_links": {"next": {"href": "/discovery/v2/events?page=1&size=1"}},
                "_embedded": {"events": [{"id": "e0"}]},
                "page": {"size": 1, "totalElements": 2, "totalPages": 2, "number": 0}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/discovery/v2/events"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "_embedded": {"events": [{"id": "e1"}]},
                "page": {"size": 1, "totalElements": 2, "totalPages": 2, "number": 1}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut out = Vec::new();
        runner(&mock_server, &["events", "--keyword", "jazz", "--pages", "5"])
            .run_with_output(&mut out)
            .await
            .unwrap();

        let pages = lines(&out);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0]["_embedded"]["events"][0]["id"], "e0");
        assert_eq!(pages[1]["_embedded"]["events"][0]["id"], "e1");
    }

    #[tokio::test]
    async fn test_venue_command_surfaces_status_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/discovery/v2/venues/nope"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .mount(&mock_server)
            .await;

        let mut out = Vec::new();
        let err = runner(&mock_server, &["venue", "nope"])
            .run_with_output(&mut out)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::UnexpectedStatus { status: 404, .. }));
        assert!(out.is_empty());
    }
}
