//! Pagination module
//!
//! Paged responses carry HAL-style `_links`; navigation follows the
//! server-supplied `next`/`prev` links and nothing else.
//!
//! # Overview
//!
//! A [`PagedResponse`] knows only what the last response reported. Calling
//! [`PagedResponse::next_page`] or [`PagedResponse::previous_page`]:
//!
//! 1. refuses with `DepthLimitExceeded` once `page.size * page.number`
//!    reaches [`MAX_PAGE_DEPTH`], before any request is made
//! 2. returns `Ok(None)` when the link for that direction is absent
//! 3. otherwise resolves the link against the client's base URL and fetches it

mod navigation;
mod types;

pub use navigation::Direction;
pub use types::{Embedded, Link, Links, Page, PagedResponse, MAX_PAGE_DEPTH};
