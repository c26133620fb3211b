//! User configuration for talking to the anthology.
//!
//! Every field has a default, so an empty (or missing) configuration file is valid. A
//! configuration file is plain TOML:
//!
//! ```toml
//! base_url = "https://aclanthology.org"
//! user_agent = "my-lab-mirror/1.0"
//! timeout_secs = 30
//! download_dir = "/data/papers"
//! ```

use std::time::Duration;

use super::*;

/// Settings used to build a [`Client`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Root of the anthology site; a trailing `/` is ignored
  pub base_url:     String,
  /// `User-Agent` header sent with every request
  pub user_agent:   String,
  /// Whole-request timeout in seconds, none when absent
  pub timeout_secs: Option<u64>,
  /// Where downloaded PDFs go unless told otherwise
  pub download_dir: PathBuf,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      base_url:     ACL_URL.to_owned(),
      user_agent:   concat!("acl/", env!("CARGO_PKG_VERSION")).to_owned(),
      timeout_secs: None,
      download_dir: Self::default_download_dir(),
    }
  }
}

impl Config {
  /// Reads a configuration from a TOML file and validates it.
  ///
  /// # Errors
  ///
  /// Returns [`AclError::Path`] if the file cannot be read, [`AclError::TomlDe`] if it is not a
  /// valid configuration and [`AclError::Config`] if `base_url` is not a URL.
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    debug!("Reading config from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    Self::from_toml(&content)
  }

  /// Parses and validates a configuration from a TOML string.
  pub fn from_toml(content: &str) -> Result<Self> {
    let config: Config = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
  }

  /// Loads the configuration at [`Config::default_path`] if one exists, otherwise the defaults.
  pub fn load() -> Result<Self> {
    let path = Self::default_path();
    if path.exists() {
      Self::from_path(path)
    } else {
      trace!("No config at {}, using defaults", path.display());
      Ok(Self::default())
    }
  }

  /// Checks that `base_url` is an absolute URL.
  pub fn validate(&self) -> Result<()> {
    url::Url::parse(&self.base_url)
      .map_err(|e| AclError::Config(format!("Invalid base_url {:?}: {e}", self.base_url)))?;
    Ok(())
  }

  /// The base URL with any trailing `/` removed, ready for path interpolation.
  pub fn site_root(&self) -> &str { self.base_url.trim_end_matches('/') }

  /// The request timeout, if one is configured.
  pub fn timeout(&self) -> Option<Duration> { self.timeout_secs.map(Duration::from_secs) }

  /// Returns the default path for the configuration file.
  ///
  /// The path is constructed as follows:
  /// - On Unix: `~/.config/acl/config.toml`
  /// - On macOS: `~/Library/Application Support/acl/config.toml`
  /// - On Windows: `%APPDATA%\acl\config.toml`
  /// - Fallback: `./acl/config.toml`
  pub fn default_path() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("acl").join("config.toml")
  }

  /// Returns the default directory for downloaded PDFs.
  ///
  /// This is `acl/papers` inside the platform's documents directory, or `./papers` when the
  /// platform has none.
  pub fn default_download_dir() -> PathBuf {
    dirs::document_dir().map(|dir| dir.join("acl").join("papers")).unwrap_or_else(|| "papers".into())
  }
}
