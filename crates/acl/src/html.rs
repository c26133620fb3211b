//! Small helpers over `scraper` that turn absent structure into [`AclError`]s.

use super::*;

/// Compiles a CSS selector.
pub(crate) fn selector(css: &str) -> Result<Selector> {
  Selector::parse(css).map_err(|e| AclError::Selector(format!("{css}: {e}")))
}

/// All text beneath `element`, concatenated in document order.
pub(crate) fn text(element: &ElementRef) -> String { element.text().collect() }

/// First descendant of `element` matching `css`.
pub(crate) fn first<'a>(element: &ElementRef<'a>, css: &str, context: &str) -> Result<ElementRef<'a>> {
  element.select(&selector(css)?).next().ok_or_else(|| AclError::MissingElement {
    selector: css.to_owned(),
    context:  context.to_owned(),
  })
}

/// Value of a required attribute.
pub(crate) fn attr<'a>(element: &ElementRef<'a>, name: &str, context: &str) -> Result<&'a str> {
  element.value().attr(name).ok_or_else(|| AclError::MissingAttribute {
    attribute: name.to_owned(),
    context:   context.to_owned(),
  })
}

/// Parses an integer out of scraped text, ignoring surrounding whitespace.
pub(crate) fn number(text: &str, context: &str) -> Result<u32> {
  text.trim().parse().map_err(|_| AclError::InvalidNumber {
    text:    text.to_owned(),
    context: context.to_owned(),
  })
}
