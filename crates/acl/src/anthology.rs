//! Anthologies: the volumes, workshops and tracks of an event.
//!
//! An anthology lives on its event's page, inside a container whose `id` is the anthology id.
//! Each paper in it is a `p` element holding two `span`s: the first with the paper's links
//! (PDF, BibTeX, and sometimes a link titled `Code`), the second with `strong > a` carrying the
//! paper id in its `href` and the title as its text.

use super::*;

/// One named grouping of papers within an event.
#[derive(Debug, Serialize)]
pub struct Anthology {
  /// Anchor id of the anthology on its event page
  id:          String,
  /// Composite `venue-year` name of the owning event
  event:       String,
  /// Display name
  name:        String,
  /// Number of papers announced by the event page
  paper_count: u32,
  /// Event page scoped to this anthology
  url:         String,
  /// Lazily fetched event page
  #[serde(skip)]
  page:        Page,
  /// Handle passed on to papers
  #[serde(skip)]
  client:      Client,
}

impl PartialEq for Anthology {
  fn eq(&self, other: &Self) -> bool {
    self.id == other.id
      && self.event == other.event
      && self.name == other.name
      && self.paper_count == other.paper_count
      && self.url == other.url
  }
}

impl Eq for Anthology {}

impl Anthology {
  /// Creates an anthology on the default site.
  pub fn new(id: &str, event: &str, name: &str, paper_count: u32) -> Self {
    Self::with_client(Client::default(), id, event, name, paper_count)
  }

  /// Creates an anthology on the site of `client`.
  pub fn with_client(client: Client, id: &str, event: &str, name: &str, paper_count: u32) -> Self {
    let url = format!("{}/events/{}/#{id}", client.base_url(), event.to_lowercase());
    Self {
      id: id.to_owned(),
      event: event.to_owned(),
      name: name.to_owned(),
      paper_count,
      page: Page::new(url.as_str()),
      url,
      client,
    }
  }

  /// Anchor id on the event page.
  pub fn id(&self) -> &str { &self.id }

  /// Owning event as `venue-year`.
  pub fn event(&self) -> &str { &self.event }

  /// Display name.
  pub fn name(&self) -> &str { &self.name }

  /// Paper count as announced by the event page.
  ///
  /// This is not checked against what [`Anthology::get_papers`] finds.
  pub fn paper_count(&self) -> u32 { self.paper_count }

  /// URL of the anthology, including its fragment.
  pub fn url(&self) -> &str { &self.url }

  /// Fetch state of the underlying page.
  pub async fn page_state(&self) -> PageState { self.page.state().await }

  /// Lists the anthology's papers in page order.
  ///
  /// The page is fetched on the first call only. A paper entry without a code link gets
  /// `code == None`.
  ///
  /// # Errors
  ///
  /// - [`AclError::Network`] if the page cannot be fetched
  /// - [`AclError::MissingElement`] / [`AclError::MissingAttribute`] if an entry lacks its title
  ///   link
  pub async fn get_papers(&self) -> Result<Vec<Paper>> {
    let papers = self.page.with_document(&self.client, |document| self.parse_papers(document)).await?;
    if papers.len() != self.paper_count as usize {
      warn!(
        "{} announces {} papers but lists {}",
        self.url,
        self.paper_count,
        papers.len()
      );
    }
    Ok(papers)
  }

  /// Extracts every paper entry under this anthology's container.
  fn parse_papers(&self, document: &Html) -> Result<Vec<Paper>> {
    let containers = selector("div[id]")?;
    let Some(container) = document.select(&containers).find(|div| div.value().id() == Some(self.id.as_str()))
    else {
      trace!("No container with id {} on {}", self.id, self.url);
      return Ok(Vec::new());
    };

    let links = selector("span:nth-child(1) > a")?;
    container
      .children()
      .filter_map(ElementRef::wrap)
      .filter(|child| child.value().name() == "p")
      .map(|entry| {
        let info = first(&entry, "span:nth-child(2) > strong > a", &self.url)?;
        let id = attr(&info, "href", &self.url)?.replace('/', "");
        let name = text(&info);
        let code = entry
          .select(&links)
          .last()
          .filter(|link| link.value().attr("title") == Some("Code"))
          .and_then(|link| link.value().attr("href"))
          .map(str::to_owned);
        trace!("Found paper {id} (code: {code:?})");
        Ok(Paper::with_client(self.client.clone(), &id, &name, code))
      })
      .collect()
  }
}
