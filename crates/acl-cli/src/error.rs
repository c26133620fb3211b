//! Error type for the `acl` command line tool.

use thiserror::Error;

use super::*;

/// Error type alias used throughout the CLI.
pub type Result<T> = core::result::Result<T, AclCliError>;

/// Errors that can end a CLI invocation.
#[derive(Error, Debug)]
pub enum AclCliError {
  /// A library operation failed (network, page structure, file system, configuration).
  #[error(transparent)]
  Acl(#[from] AclError),

  /// An interactive prompt could not be shown or answered.
  #[error(transparent)]
  Dialog(#[from] dialoguer::Error),

  /// A listing could not be serialized for `--json` output.
  #[error(transparent)]
  Json(#[from] serde_json::Error),

  /// Arguments are individually valid but contradict each other.
  #[error("{0}")]
  InvalidArgument(String),

  /// Something named on the command line is not listed on the site.
  #[error("{0}")]
  NotFound(String),
}
