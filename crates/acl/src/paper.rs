//! Papers and PDF downloads.
//!
//! A [`Paper`] is the leaf of the hierarchy. Papers are normally obtained from
//! [`Anthology::get_papers`], which fills in the identifier, the title and the optional link to a
//! code repository scraped from the listing.
//!
//! # Examples
//!
//! ```no_run
//! use acl::paper::Paper;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let paper = Paper::new("2023.acl-long.1", "One Cannot Stand for Everyone!", None);
//! assert_eq!(paper.url(), "https://aclanthology.org/2023.acl-long.1");
//! assert_eq!(paper.pdf(), "https://aclanthology.org/2023.acl-long.1.pdf");
//!
//! let path = paper.download("papers").await?;
//! println!("Saved to {}", path.display());
//! # Ok(())
//! # }
//! ```

use super::*;

/// A single published paper.
///
/// `url` and `pdf` are derived from `id` when the paper is built and cannot change afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Paper {
  /// Site-unique identifier, e.g. `2023.acl-long.1`
  id:     String,
  /// Display title
  name:   String,
  /// Link to the paper's code repository, if the listing advertises one
  code:   Option<String>,
  /// Landing page
  url:    String,
  /// PDF location
  pdf:    String,
  /// Handle used for downloads
  #[serde(skip)]
  client: Client,
}

impl PartialEq for Paper {
  fn eq(&self, other: &Self) -> bool {
    self.id == other.id && self.name == other.name && self.code == other.code && self.url == other.url
  }
}

impl Eq for Paper {}

impl Paper {
  /// Creates a paper on the default site.
  pub fn new(id: &str, name: &str, code: Option<String>) -> Self {
    Self::with_client(Client::default(), id, name, code)
  }

  /// Creates a paper on the site of `client`.
  pub fn with_client(client: Client, id: &str, name: &str, code: Option<String>) -> Self {
    let url = format!("{}/{id}", client.base_url());
    let pdf = format!("{url}.pdf");
    Self { id: id.to_owned(), name: name.to_owned(), code, url, pdf, client }
  }

  /// Site-unique identifier.
  pub fn id(&self) -> &str { &self.id }

  /// Display title.
  pub fn name(&self) -> &str { &self.name }

  /// Link to the code repository, if any.
  pub fn code(&self) -> Option<&str> { self.code.as_deref() }

  /// Landing page URL.
  pub fn url(&self) -> &str { &self.url }

  /// PDF URL.
  pub fn pdf(&self) -> &str { &self.pdf }

  /// Filename the PDF is stored under: the title with illegal characters removed, plus `.pdf`.
  ///
  /// # Examples
  ///
  /// ```
  /// use acl::paper::Paper;
  ///
  /// let paper = Paper::new("2020.acl-main.1", "A/B: C?", None);
  /// assert_eq!(paper.filename().to_str(), Some("AB C.pdf"));
  /// ```
  pub fn filename(&self) -> PathBuf { PathBuf::from(format!("{}.pdf", format::sanitize_filename(&self.name))) }

  /// Downloads the paper's PDF into `dir`.
  ///
  /// This method will:
  /// 1. Create `dir` and any missing ancestors
  /// 2. Fetch the PDF
  /// 3. Write it to `dir/<filename>`, replacing any file already there
  ///
  /// # Returns
  ///
  /// The path of the written file.
  ///
  /// # Errors
  ///
  /// - [`AclError::Network`] if the PDF cannot be fetched (including non-2xx answers)
  /// - [`AclError::Path`] if the directory or file cannot be written
  ///
  /// A failed write may leave a truncated file behind.
  pub async fn download(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = dir.as_ref();
    if !dir.exists() {
      debug!("Creating directory {}", dir.display());
      tokio::fs::create_dir_all(dir).await?;
    }

    let bytes = self.client.fetcher().fetch_bytes(&self.pdf).await?;
    let path = dir.join(self.filename());
    debug!("Writing PDF to path: {path:?}");
    tokio::fs::write(&path, bytes).await?;
    Ok(path)
  }
}
