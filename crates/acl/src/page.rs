//! Fetch-once page cache.
//!
//! Every value that lists something ([`Catalog`](crate::catalog::Catalog), [`Venue`],
//! [`Event`], [`Anthology`]) owns exactly one [`Page`]. The page is fetched the first time it is
//! needed and the body is reused for every later call on the same owner, even if the remote
//! content has changed since. Building a new owner starts with a fresh, unfetched page.
//!
//! The states are:
//!
//! ```text
//!            ok                       (terminal)
//! Unfetched ────────────────────────▶ Fetched
//!     │                                  ▲
//!     │ err                              │ ok
//!     ▼                                  │
//! FetchFailed ───────────────────────────┘
//!     ▲   │ err
//!     └───┘
//! ```
//!
//! The check and the fetch happen under one async lock, so concurrent first calls on the same
//! owner produce a single request.

use tokio::sync::Mutex;

use super::*;

/// Observable state of a [`Page`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
  /// No fetch has been attempted yet.
  Unfetched,
  /// The body is cached and will be reused.
  Fetched,
  /// The last attempt failed with this message; the next access tries again.
  FetchFailed(String),
}

/// Internal cache slot.
#[derive(Debug)]
enum Slot {
  /// Nothing attempted.
  Unfetched,
  /// Cached body.
  Fetched(Arc<str>),
  /// Message of the last failure.
  FetchFailed(String),
}

/// A lazily fetched HTML document.
#[derive(Debug)]
pub struct Page {
  /// Where the document lives
  url:  String,
  /// Fetch state, guarded so that check-then-populate is atomic
  slot: Mutex<Slot>,
}

impl Page {
  /// Creates an unfetched page for `url`.
  pub fn new(url: impl Into<String>) -> Self { Self { url: url.into(), slot: Mutex::new(Slot::Unfetched) } }

  /// URL of the document.
  pub fn url(&self) -> &str { &self.url }

  /// Current state, without fetching.
  pub async fn state(&self) -> PageState {
    match &*self.slot.lock().await {
      Slot::Unfetched => PageState::Unfetched,
      Slot::Fetched(_) => PageState::Fetched,
      Slot::FetchFailed(message) => PageState::FetchFailed(message.clone()),
    }
  }

  /// Returns the document body, fetching it through `client` unless it is already cached.
  ///
  /// # Errors
  ///
  /// Propagates the fetcher's error unchanged. The page is then left in
  /// [`PageState::FetchFailed`] and the next call fetches again.
  pub async fn body(&self, client: &Client) -> Result<Arc<str>> {
    let mut slot = self.slot.lock().await;
    if let Slot::Fetched(body) = &*slot {
      trace!("Reusing cached page {}", self.url);
      return Ok(Arc::clone(body));
    }

    debug!("Fetching page {}", self.url);
    match client.fetcher().fetch_text(&self.url).await {
      Ok(body) => {
        let body: Arc<str> = body.into();
        *slot = Slot::Fetched(Arc::clone(&body));
        Ok(body)
      },
      Err(e) => {
        *slot = Slot::FetchFailed(e.to_string());
        Err(e)
      },
    }
  }

  /// Fetches (or reuses) the body and hands the parsed document to `extract`.
  ///
  /// The parsed tree never outlives this call, so owners can be used from any task.
  pub async fn with_document<T>(
    &self,
    client: &Client,
    extract: impl FnOnce(&Html) -> Result<T>,
  ) -> Result<T> {
    let body = self.body(client).await?;
    let document = Html::parse_document(&body);
    extract(&document)
  }
}
