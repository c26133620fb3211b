//! Shared doubles for command tests: an in-memory site and a recording interaction.

use std::{
  collections::HashMap,
  sync::{Arc, Mutex},
};

use acl::client::Fetcher;
use async_trait::async_trait;

use super::*;

/// Event page of ACL 2023 with one two-paper anthology.
pub const EVENT_PAGE: &str = r##"<html><body>
<section><ul>
  <li><a href="#2023demo">System Demonstrations</a> <span>2 papers</span></li>
</ul></section>
<div id="2023demo">
  <p>
    <span><a href="/2023.demo-1.1.pdf" title="Open PDF">pdf</a></span>
    <span><strong><a href="/2023.demo-1.1/">First Demo</a></strong></span>
  </p>
  <p>
    <span><a href="/2023.demo-1.2.pdf" title="Open PDF">pdf</a></span>
    <span><strong><a href="/2023.demo-1.2/">Second Demo</a></strong></span>
  </p>
</div>
</body></html>"##;

pub const FIRST_PDF: &str = "https://aclanthology.org/2023.demo-1.1.pdf";
pub const SECOND_PDF: &str = "https://aclanthology.org/2023.demo-1.2.pdf";

/// In-memory site that records requests and answers 404 for anything unknown.
#[derive(Default)]
pub struct Site {
  pages:    HashMap<String, Vec<u8>>,
  requests: Mutex<Vec<String>>,
}

impl Site {
  /// The ACL 2023 event page and both PDFs.
  pub fn acl_2023() -> Self {
    Self::default()
      .with_page("https://aclanthology.org/events/acl-2023", EVENT_PAGE)
      .with_page("https://aclanthology.org/events/acl-2023/", EVENT_PAGE)
      .with_page(FIRST_PDF, "%PDF first")
      .with_page(SECOND_PDF, "%PDF second")
  }

  pub fn with_page(mut self, url: &str, body: &str) -> Self {
    self.pages.insert(url.to_owned(), body.as_bytes().to_vec());
    self
  }

  pub fn without_page(mut self, url: &str) -> Self {
    self.pages.remove(url);
    self
  }

  pub fn requested(&self, url: &str) -> bool { self.requests.lock().unwrap().iter().any(|r| r == url) }

  fn serve(&self, url: &str) -> acl::error::Result<Vec<u8>> {
    self.requests.lock().unwrap().push(url.to_owned());
    let without_fragment = url.split('#').next().unwrap_or(url);
    self.pages.get(without_fragment).cloned().ok_or_else(|| {
      AclError::Path(std::io::Error::new(std::io::ErrorKind::NotFound, format!("404 for {url}")))
    })
  }
}

#[async_trait]
impl Fetcher for Site {
  async fn fetch_text(&self, url: &str) -> acl::error::Result<String> {
    Ok(String::from_utf8(self.serve(url)?).unwrap())
  }

  async fn fetch_bytes(&self, url: &str) -> acl::error::Result<Vec<u8>> { self.serve(url) }
}

/// A client over `site`, keeping a handle for request inspection.
pub fn client(site: Site) -> (Client, Arc<Site>) {
  let site = Arc::new(site);
  (Client::with_fetcher(site.clone()), site)
}

/// Answers every prompt with a fixed value and records what was shown.
pub struct Recorder {
  answer:  bool,
  prompts: Mutex<Vec<String>>,
  replies: Mutex<Vec<String>>,
}

impl Recorder {
  pub fn answering(answer: bool) -> Self {
    Self { answer, prompts: Mutex::default(), replies: Mutex::default() }
  }

  pub fn prompts(&self) -> Vec<String> { self.prompts.lock().unwrap().clone() }

  pub fn replies(&self) -> Vec<String> { self.replies.lock().unwrap().clone() }
}

impl UserInteraction for Recorder {
  fn confirm(&self, message: &str) -> Result<bool> {
    self.prompts.lock().unwrap().push(message.to_owned());
    Ok(self.answer)
  }

  fn reply(&self, content: ResponseContent) -> Result<()> {
    let line = match content {
      ResponseContent::Venues(venues) => format!("venues: {}", venues.len()),
      ResponseContent::Events(events) => format!("events: {}", events.len()),
      ResponseContent::Anthologies(anthologies) => format!("anthologies: {}", anthologies.len()),
      ResponseContent::Papers(papers) => {
        format!("papers: {}", papers.iter().map(Paper::id).collect::<Vec<_>>().join(", "))
      },
      ResponseContent::Success(text) => format!("success: {text}"),
      ResponseContent::Info(text) => format!("info: {text}"),
      ResponseContent::Warning(text) => format!("warning: {text}"),
    };
    self.replies.lock().unwrap().push(line);
    Ok(())
  }
}
