//! Filename formatting for downloaded papers.

use super::*;

lazy_static! {
  /// Characters that are not allowed in filenames on common filesystems: `/ \ ? % * : | " < >`,
  /// DEL and the ASCII control range.
  static ref ILLEGAL_FILENAME_CHARS: Regex = Regex::new(r#"[/\\?%*:|"<>\x7F\x00-\x1F]"#).unwrap();
}

/// Removes every character that is illegal in a filename from `name`.
///
/// Nothing else is touched: spaces, punctuation outside the illegal set and non-ASCII text are
/// kept as they are, and the result is not truncated.
///
/// # Examples
///
/// ```
/// use acl::format::sanitize_filename;
///
/// assert_eq!(sanitize_filename("A/B: C?"), "AB C");
/// ```
pub fn sanitize_filename(name: &str) -> String {
  ILLEGAL_FILENAME_CHARS.replace_all(name, "").into_owned()
}
