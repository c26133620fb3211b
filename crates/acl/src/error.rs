//! Error types for the acl library.
//!
//! This module provides a single error type that covers every way a traversal of the
//! anthology can fail:
//! - Network and HTTP status errors
//! - Unexpected page structure
//! - File system operations
//! - Configuration loading
//!
//! Lookups that simply find nothing (a venue name or event year that is not listed) are not
//! errors. Those return `Ok(None)`.
//!
//! # Examples
//!
//! ```no_run
//! use acl::{error::AclError, venue::Venue};
//!
//! # async fn example() -> Result<(), AclError> {
//! let venue = Venue::new("ACL");
//! match venue.get_all_events(None, None).await {
//!   Err(AclError::Network(e)) => println!("Network error: {}", e),
//!   Err(AclError::MissingElement { selector, .. }) => println!("Page changed: {}", selector),
//!   Err(e) => println!("Other error: {}", e),
//!   Ok(events) => println!("Found {} events", events.len()),
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

/// Error type alias used for the [`acl`](crate) crate.
pub type Result<T> = core::result::Result<T, AclError>;

/// Errors that can occur when browsing the anthology.
///
/// Most variants either wrap an underlying error or carry enough context (the selector or
/// attribute that was expected, and the page it was expected on) to locate the problem.
#[derive(Error, Debug)]
pub enum AclError {
  /// A network request failed.
  ///
  /// This can occur when:
  /// - The network is unavailable
  /// - The server is unreachable
  /// - The request times out
  /// - The server answers with a non-2xx status
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// A file system operation failed.
  ///
  /// This occurs when:
  /// - The download directory cannot be created
  /// - The PDF cannot be written (permissions, disk full, invalid name)
  /// - A configuration file cannot be read
  #[error(transparent)]
  Path(#[from] std::io::Error),

  /// An element the page is expected to contain is absent.
  ///
  /// This usually means the site layout changed or the page is empty.
  #[error("Expected element `{selector}` is missing in {context}")]
  MissingElement {
    /// The CSS selector (or element description) that matched nothing
    selector: String,
    /// Where the element was looked for, usually a URL
    context:  String,
  },

  /// An element was found but lacks an attribute it must carry.
  #[error("Element in {context} has no `{attribute}` attribute")]
  MissingAttribute {
    /// Name of the attribute that was expected
    attribute: String,
    /// Where the element was found, usually a URL
    context:   String,
  },

  /// Text that should hold an integer (a year or a paper count) does not.
  #[error("Could not read a number from {text:?} in {context}")]
  InvalidNumber {
    /// The offending text, as scraped
    text:    String,
    /// Where the text was found, usually a URL
    context: String,
  },

  /// A CSS selector failed to compile.
  #[error("Invalid selector: {0}")]
  Selector(String),

  /// A configuration file is not valid TOML for [`Config`](crate::config::Config).
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// A configuration value is not usable.
  #[error("{0}")]
  Config(String),
}
