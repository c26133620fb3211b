//! Events: one year of a venue.
//!
//! An event page lists its anthologies in a `section` as `ul > li` items. Each item holds an
//! anchor pointing at the anthology's fragment (`#2023acl-long`) with the anthology name as its
//! text, and a badge `span` announcing the number of papers (`910 papers`).
//!
//! # Examples
//!
//! ```no_run
//! use acl::event::Event;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let event = Event::new("ACL", 2023);
//! assert_eq!(event.url(), "https://aclanthology.org/events/acl-2023");
//!
//! for anthology in event.search_anthology("Findings").await? {
//!   println!("{} ({} papers)", anthology.name(), anthology.paper_count());
//! }
//! # Ok(())
//! # }
//! ```

use super::*;

/// Selector for the anthology items of an event page.
const ANTHOLOGY_ITEMS: &str = "section ul li";

/// One year's instance of a venue.
#[derive(Debug, Serialize)]
pub struct Event {
  /// Venue name as given
  venue:  String,
  /// Year of the event
  year:   u32,
  /// Event page
  url:    String,
  /// Lazily fetched event page
  #[serde(skip)]
  page:   Page,
  /// Handle passed on to anthologies
  #[serde(skip)]
  client: Client,
}

impl PartialEq for Event {
  fn eq(&self, other: &Self) -> bool {
    self.venue == other.venue && self.year == other.year && self.url == other.url
  }
}

impl Eq for Event {}

impl Event {
  /// Creates an event on the default site.
  pub fn new(venue: &str, year: u32) -> Self { Self::with_client(Client::default(), venue, year) }

  /// Creates an event on the site of `client`.
  pub fn with_client(client: Client, venue: &str, year: u32) -> Self {
    let url = format!("{}/events/{}-{year}", client.base_url(), venue.to_lowercase());
    Self { venue: venue.to_owned(), year, page: Page::new(url.as_str()), url, client }
  }

  /// Venue name.
  pub fn venue(&self) -> &str { &self.venue }

  /// Year.
  pub fn year(&self) -> u32 { self.year }

  /// Composite `venue-year` identity, used to tag anthologies.
  pub fn name(&self) -> String { format!("{}-{}", self.venue, self.year) }

  /// Event page URL.
  pub fn url(&self) -> &str { &self.url }

  /// Fetch state of the underlying page.
  pub async fn page_state(&self) -> PageState { self.page.state().await }

  /// Lists every anthology of the event in page order.
  ///
  /// # Errors
  ///
  /// - [`AclError::Network`] if the page cannot be fetched
  /// - [`AclError::MissingElement`] / [`AclError::MissingAttribute`] if an item lacks its anchor,
  ///   `href` or badge
  /// - [`AclError::InvalidNumber`] if a badge does not hold a paper count
  pub async fn get_anthologies(&self) -> Result<Vec<Anthology>> {
    self.page.with_document(&self.client, |document| self.parse_anthologies(document, |_| true)).await
  }

  /// Lists the anthologies whose name contains `search_text`, in page order.
  ///
  /// Matching is a case-sensitive substring test. No match gives an empty list.
  ///
  /// # Errors
  ///
  /// Same as [`Event::get_anthologies`], for the matching items.
  pub async fn search_anthology(&self, search_text: &str) -> Result<Vec<Anthology>> {
    debug!("Searching {} for anthologies matching {search_text:?}", self.url);
    self
      .page
      .with_document(&self.client, |document| {
        self.parse_anthologies(document, |name| name.contains(search_text))
      })
      .await
  }

  /// Builds an anthology from every item whose anchor text satisfies `keep`.
  fn parse_anthologies(&self, document: &Html, keep: impl Fn(&str) -> bool) -> Result<Vec<Anthology>> {
    let items = selector(ANTHOLOGY_ITEMS)?;
    let event = self.name();
    let mut anthologies = Vec::new();
    for item in document.select(&items) {
      let anchor = first(&item, "a", &self.url)?;
      let name = text(&anchor);
      if !keep(&name) {
        continue;
      }
      let id = attr(&anchor, "href", &self.url)?.replace('#', "");
      let badge = first(&item, "span", &self.url)?;
      let paper_count = parse_paper_count(&text(&badge), &self.url)?;
      trace!("Found anthology {id} with {paper_count} papers");
      anthologies.push(Anthology::with_client(self.client.clone(), &id, &event, &name, paper_count));
    }
    Ok(anthologies)
  }
}

/// Reads the count out of a badge such as `"12 papers"` or `"1 paper"`.
fn parse_paper_count(badge: &str, context: &str) -> Result<u32> {
  let digits = badge.trim().replace("papers", "").replace("paper", "");
  number(&digits, context).map_err(|_| AclError::InvalidNumber {
    text:    badge.to_owned(),
    context: context.to_owned(),
  })
}
