//! Venues and their yearly events.
//!
//! A venue page groups its events in `section div.row` blocks whose `h4` holds a link with the
//! year as text.

use super::*;

/// Selector for the year links of a venue page.
const YEAR_LINKS: &str = r#"section div[class="row"] h4 a"#;

/// A recurring publication outlet, such as a conference series.
#[derive(Debug, Serialize)]
pub struct Venue {
  /// Display name, e.g. `ACL`
  name:   String,
  /// Venue page
  url:    String,
  /// Lazily fetched venue page
  #[serde(skip)]
  page:   Page,
  /// Handle passed on to events
  #[serde(skip)]
  client: Client,
}

impl PartialEq for Venue {
  fn eq(&self, other: &Self) -> bool { self.name == other.name && self.url == other.url }
}

impl Eq for Venue {}

impl Venue {
  /// Creates a venue on the default site.
  ///
  /// ```
  /// use acl::venue::Venue;
  ///
  /// assert_eq!(Venue::new("ACL").url(), "https://aclanthology.org/venues/acl");
  /// ```
  pub fn new(name: &str) -> Self { Self::with_client(Client::default(), name) }

  /// Creates a venue on the site of `client`.
  pub fn with_client(client: Client, name: &str) -> Self {
    let url = format!("{}/venues/{}", client.base_url(), name.to_lowercase());
    Self { name: name.to_owned(), page: Page::new(url.as_str()), url, client }
  }

  /// Display name.
  pub fn name(&self) -> &str { &self.name }

  /// Venue page URL.
  pub fn url(&self) -> &str { &self.url }

  /// Fetch state of the underlying page.
  pub async fn page_state(&self) -> PageState { self.page.state().await }

  /// Lists the venue's events in page order.
  ///
  /// When both `start_year` and `end_year` are given, only events with
  /// `start_year <= year <= end_year` are kept. When either is `None`, no filtering happens at
  /// all; use [`Venue::get_events_in`] for one-sided ranges.
  ///
  /// # Errors
  ///
  /// - [`AclError::Network`] if the page cannot be fetched
  /// - [`AclError::InvalidNumber`] if a year link does not hold a year
  pub async fn get_all_events(&self, start_year: Option<u32>, end_year: Option<u32>) -> Result<Vec<Event>> {
    match (start_year, end_year) {
      (Some(start), Some(end)) => self.get_events_in(start..=end).await,
      _ => self.get_events_in(..).await,
    }
  }

  /// Lists the venue's events whose year falls in `years`, in page order.
  ///
  /// ```no_run
  /// # use acl::venue::Venue;
  /// # async fn example() -> Result<(), acl::error::AclError> {
  /// let recent = Venue::new("NAACL").get_events_in(2020..).await?;
  /// # Ok(())
  /// # }
  /// ```
  pub async fn get_events_in(&self, years: impl RangeBounds<u32>) -> Result<Vec<Event>> {
    trace!(
      "Listing events of {} between {:?} and {:?}",
      self.name,
      years.start_bound(),
      years.end_bound()
    );
    self
      .page
      .with_document(&self.client, |document| {
        let events = self
          .parse_years(document)?
          .into_iter()
          .filter(|year| years.contains(year))
          .map(|year| self.event(year))
          .collect();
        Ok(events)
      })
      .await
  }

  /// Returns the first listed event of `year`, or `None` if the venue has no such event.
  ///
  /// Entries after the match are not read, so a malformed year further down the page does not
  /// affect the lookup.
  ///
  /// # Errors
  ///
  /// Same as [`Venue::get_all_events`], for entries up to the match.
  pub async fn get_event(&self, year: u32) -> Result<Option<Event>> {
    self
      .page
      .with_document(&self.client, |document| {
        let links = selector(YEAR_LINKS)?;
        for link in document.select(&links) {
          if number(&text(&link), &self.url)? == year {
            return Ok(Some(self.event(year)));
          }
        }
        Ok(None)
      })
      .await
  }

  /// Builds an event of this venue.
  fn event(&self, year: u32) -> Event { Event::with_client(self.client.clone(), &self.name, year) }

  /// Reads every listed year, in page order.
  fn parse_years(&self, document: &Html) -> Result<Vec<u32>> {
    let links = selector(YEAR_LINKS)?;
    document.select(&links).map(|link| number(&text(&link), &self.url)).collect()
  }
}
