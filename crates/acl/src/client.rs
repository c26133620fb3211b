//! Site handle and HTTP transport.
//!
//! A [`Client`] bundles the site's base URL with a [`Fetcher`]. Every value in the hierarchy
//! carries a clone of the client it was built from and passes it on to the values it creates,
//! so a single configuration (and a single pooled HTTP connection) serves a whole traversal.
//!
//! # Examples
//!
//! ```no_run
//! use acl::{client::Client, config::Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_toml("timeout_secs = 30")?;
//! let client = Client::from_config(&config)?;
//!
//! let venue = client.venue("EMNLP");
//! let events = venue.get_all_events(None, None).await?;
//! # Ok(())
//! # }
//! ```

use super::*;

/// Transport used to retrieve pages and PDFs.
///
/// [`HttpFetcher`] is the real implementation. Anything else implementing this trait (an
/// offline mirror, a test double counting requests) can be plugged into a [`Client`] with
/// [`Client::with_fetcher`].
#[async_trait]
pub trait Fetcher: Send + Sync {
  /// Retrieves the body at `url` as text.
  async fn fetch_text(&self, url: &str) -> Result<String>;

  /// Retrieves the body at `url` as raw bytes.
  async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>>;
}

/// [`Fetcher`] backed by a pooled `reqwest` client.
///
/// Responses with a non-2xx status are turned into [`AclError::Network`]. Nothing is retried.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
  /// Underlying connection pool
  client: reqwest::Client,
}

impl HttpFetcher {
  /// Creates a fetcher with `reqwest`'s defaults.
  pub fn new() -> Self { Self::default() }

  /// Creates a fetcher honoring the user agent and timeout of `config`.
  pub fn from_config(config: &Config) -> Result<Self> {
    let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
    if let Some(timeout) = config.timeout() {
      builder = builder.timeout(timeout);
    }
    Ok(Self { client: builder.build()? })
  }

  /// Sends a GET request and rejects unsuccessful statuses.
  async fn get(&self, url: &str) -> Result<reqwest::Response> {
    debug!("GET {url}");
    let response = self.client.get(url).send().await?;
    trace!("{url} answered {}", response.status());
    Ok(response.error_for_status()?)
  }
}

#[async_trait]
impl Fetcher for HttpFetcher {
  async fn fetch_text(&self, url: &str) -> Result<String> {
    let body = self.get(url).await?.text().await?;
    trace!("{url} returned {} bytes of text", body.len());
    Ok(body)
  }

  async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
    let bytes = self.get(url).await?.bytes().await?;
    trace!("{url} returned {} bytes", bytes.len());
    Ok(bytes.to_vec())
  }
}

/// Handle to one anthology site.
///
/// Cloning is cheap: clones share the same [`Fetcher`]. A client holds no page state; caches
/// live in the values built from it.
#[derive(Clone)]
pub struct Client {
  /// Site root without a trailing `/`
  base_url: Arc<str>,
  /// Transport for every request made through this client
  fetcher:  Arc<dyn Fetcher>,
}

impl Default for Client {
  fn default() -> Self { Self { base_url: ACL_URL.into(), fetcher: Arc::new(HttpFetcher::new()) } }
}

impl Debug for Client {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Client").field("base_url", &self.base_url).finish_non_exhaustive()
  }
}

impl Client {
  /// Creates a client for <https://aclanthology.org> using plain HTTP defaults.
  pub fn new() -> Self { Self::default() }

  /// Creates a client from a validated [`Config`].
  ///
  /// # Errors
  ///
  /// Fails if `base_url` is not a URL or the HTTP client cannot be built.
  pub fn from_config(config: &Config) -> Result<Self> {
    config.validate()?;
    Ok(Self {
      base_url: config.site_root().into(),
      fetcher:  Arc::new(HttpFetcher::from_config(config)?),
    })
  }

  /// Creates a client for the default site using `fetcher` for every request.
  pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> Self { Self { base_url: ACL_URL.into(), fetcher } }

  /// Points this client at another site root, such as a local mirror.
  pub fn with_base_url(mut self, base_url: &str) -> Self {
    self.base_url = base_url.trim_end_matches('/').into();
    self
  }

  /// Site root without a trailing `/`.
  pub fn base_url(&self) -> &str { &self.base_url }

  /// Transport used by this client.
  pub fn fetcher(&self) -> &dyn Fetcher { self.fetcher.as_ref() }

  /// The site's venue listing.
  pub fn catalog(&self) -> catalog::Catalog { catalog::Catalog::with_client(self.clone()) }

  /// A venue by name, without checking that the site lists it.
  pub fn venue(&self, name: &str) -> Venue { Venue::with_client(self.clone(), name) }

  /// An event by venue name and year, without checking that the site lists it.
  pub fn event(&self, venue: &str, year: u32) -> Event { Event::with_client(self.clone(), venue, year) }
}
