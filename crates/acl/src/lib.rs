//! Client library for browsing the ACL Anthology and downloading its papers.
//!
//! `acl` scrapes the static pages of <https://aclanthology.org> and exposes the site's fixed
//! hierarchy as a chain of types, each of which lazily fetches one page and builds the next level
//! down from it:
//!
//! - [`Catalog`](catalog::Catalog): the site root, listing every venue
//! - [`Venue`](venue::Venue): a recurring publication outlet, listing its yearly events
//! - [`Event`](event::Event): one venue-year, listing its anthologies (volumes, workshops, tracks)
//! - [`Anthology`](anthology::Anthology): one grouping of papers
//! - [`Paper`](paper::Paper): a single paper, which can download its PDF
//!
//! # Features
//!
//! - **Fetch once**: every page-holding value fetches its page on first use and reuses it for
//!   every later call on the same instance
//! - **Explicit not-found**: looking up a venue or event that is not listed yields `Ok(None)`
//! - **Pluggable transport**: all network access goes through the [`Fetcher`](client::Fetcher)
//!   trait, so a different transport (or an in-memory one for tests) can be swapped in
//!
//! # Getting Started
//!
//! ```no_run
//! use acl::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   let venue = Venue::new("ACL");
//!
//!   // Events from 2019 to 2021, inclusive
//!   for event in venue.get_all_events(Some(2019), Some(2021)).await? {
//!     println!("{} {}", event.venue(), event.year());
//!   }
//!
//!   // Find the long papers volume of ACL 2023 and download everything in it
//!   if let Some(event) = venue.get_event(2023).await? {
//!     for anthology in event.search_anthology("Long Papers").await? {
//!       for paper in anthology.get_papers().await? {
//!         paper.download("papers").await?;
//!       }
//!     }
//!   }
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`catalog`], [`venue`], [`event`], [`anthology`], [`paper`]: the hierarchy
//! - [`client`]: the shared site handle and the [`Fetcher`](client::Fetcher) transport seam
//! - [`page`]: the fetch-once page cache every listing type embeds
//! - [`config`]: user configuration (base URL, user agent, timeout, download directory)
//! - [`format`]: filename sanitization
//! - [`error`]: the crate's error type

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  fmt::{self, Debug},
  ops::RangeBounds,
  path::{Path, PathBuf},
  sync::Arc,
};

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};
#[cfg(test)]
use {tempfile::tempdir, tracing_test::traced_test};

pub mod anthology;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod event;
pub mod format;
mod html;
pub mod page;
pub mod paper;
pub mod venue;

use crate::{
  anthology::Anthology, client::*, config::Config, error::*, event::Event, html::*, page::*,
  paper::Paper, venue::Venue,
};

/// Root URL of the ACL Anthology, used unless a [`Config`] says otherwise.
pub const ACL_URL: &str = "https://aclanthology.org";

/// Common types for ergonomic imports.
///
/// ```no_run
/// use acl::prelude::*;
///
/// async fn example() -> Result<(), AclError> {
///   let catalog = Catalog::new();
///   let venues = catalog.get_venues().await?;
///   println!("{} venues", venues.len());
///   Ok(())
/// }
/// ```
pub mod prelude {
  pub use crate::{
    anthology::Anthology,
    catalog::Catalog,
    client::{Client, Fetcher},
    config::Config,
    error::AclError,
    event::Event,
    page::PageState,
    paper::Paper,
    venue::Venue,
  };
}
