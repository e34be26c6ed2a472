//! Following `next`/`prev` links

use super::types::{Link, PagedResponse};
use crate::client::DiscoveryClient;
use crate::error::Result;
use tracing::{debug, warn};

/// Direction to move through a result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Follow the `next` link
    Next,
    /// Follow the `prev` link
    Prev,
}

impl PagedResponse {
    /// Link for `direction`, if the server supplied one
    pub fn link(&self, direction: Direction) -> Option<&Link> {
        match direction {
            Direction::Next => self.links.next(),
            Direction::Prev => self.links.prev(),
        }
    }

    /// Fetch the following page
    ///
    /// Returns `Ok(None)` when there is no `next` link.
    pub async fn next_page(&self, client: &DiscoveryClient) -> Result<Option<PagedResponse>> {
        self.follow(client, Direction::Next).await
    }

    /// Fetch the preceding page
    ///
    /// Returns `Ok(None)` when there is no `prev` link.
    pub async fn previous_page(&self, client: &DiscoveryClient) -> Result<Option<PagedResponse>> {
        self.follow(client, Direction::Prev).await
    }

    /// Fetch the page in `direction`
    ///
    /// The depth guard is checked first, so a deep response fails even when
    /// the link is absent.
    pub async fn follow(
        &self,
        client: &DiscoveryClient,
        direction: Direction,
    ) -> Result<Option<PagedResponse>> {
        if let Err(e) = self.check_depth() {
            warn!("Refusing to follow {:?} link: {}", direction, e);
            return Err(e);
        }

        let Some(link) = self.link(direction) else {
            debug!("No {:?} link, pagination done", direction);
            return Ok(None);
        };

        client.follow_link(link).await.map(Some)
    }
}
