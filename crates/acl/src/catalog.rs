//! The site root and its venue listing.

use super::*;

/// Selector for the venue table body of the root page.
const VENUE_TABLE: &str = "table > tbody";
/// Selector, within the venue table body, for the venue links.
const VENUE_LINKS: &str = "tr > th > a";

/// The root listing of every venue on the site.
#[derive(Debug)]
pub struct Catalog {
  /// Lazily fetched root page
  page:   Page,
  /// Handle passed on to venues
  client: Client,
}

impl Default for Catalog {
  fn default() -> Self { Self::with_client(Client::default()) }
}

impl Catalog {
  /// Creates the catalog of the default site.
  pub fn new() -> Self { Self::default() }

  /// Creates the catalog of the site of `client`.
  pub fn with_client(client: Client) -> Self { Self { page: Page::new(client.base_url()), client } }

  /// URL of the root page.
  pub fn url(&self) -> &str { self.page.url() }

  /// Fetch state of the underlying page.
  pub async fn page_state(&self) -> PageState { self.page.state().await }

  /// Lists every venue in table order.
  ///
  /// # Errors
  ///
  /// - [`AclError::Network`] if the root page cannot be fetched
  /// - [`AclError::MissingElement`] if the page has no venue table
  pub async fn get_venues(&self) -> Result<Vec<Venue>> {
    self.page.with_document(&self.client, |document| self.parse_venues(document, |_| true)).await
  }

  /// Returns the venue whose name is exactly `name`, or `None` if it is not listed.
  ///
  /// The comparison is case-sensitive and does not trim or normalize anything.
  ///
  /// ```no_run
  /// # use acl::catalog::Catalog;
  /// # async fn example() -> Result<(), acl::error::AclError> {
  /// let catalog = Catalog::new();
  /// assert!(catalog.get_venue("ACL").await?.is_some());
  /// assert!(catalog.get_venue("acl").await?.is_none());
  /// # Ok(())
  /// # }
  /// ```
  pub async fn get_venue(&self, name: &str) -> Result<Option<Venue>> {
    self
      .page
      .with_document(&self.client, |document| {
        Ok(self.parse_venues(document, |text| text == name)?.into_iter().next())
      })
      .await
  }

  /// Builds a venue from every link whose text satisfies `keep`.
  fn parse_venues(&self, document: &Html, keep: impl Fn(&str) -> bool) -> Result<Vec<Venue>> {
    let table = document.select(&selector(VENUE_TABLE)?).next().ok_or_else(|| {
      AclError::MissingElement { selector: VENUE_TABLE.to_owned(), context: self.url().to_owned() }
    })?;
    let links = selector(VENUE_LINKS)?;
    let venues = table
      .select(&links)
      .map(|link| text(&link))
      .filter(|name| keep(name))
      .map(|name| Venue::with_client(self.client.clone(), &name))
      .collect::<Vec<_>>();
    debug!("{} lists {} matching venues", self.url(), venues.len());
    Ok(venues)
  }
}
