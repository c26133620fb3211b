//! Output and prompts, behind a trait so commands stay independent of the terminal.

use dialoguer::Confirm;

use super::*;

pub static INFO_PREFIX: &str = "ℹ ";
pub static SUCCESS_PREFIX: &str = "✓ ";
pub static WARNING_PREFIX: &str = "! ";
pub static ITEM_PREFIX: &str = "├─";
pub static LAST_ITEM_PREFIX: &str = "└─";
pub static CONTINUE_PREFIX: &str = "│  ";
pub static BLANK_PREFIX: &str = "   ";

/// Something a command wants to show the user.
#[derive(Debug)]
pub enum ResponseContent<'a> {
  /// A venue listing
  Venues(&'a [Venue]),
  /// An event listing
  Events(&'a [Event]),
  /// An anthology listing
  Anthologies(&'a [Anthology]),
  /// A paper listing
  Papers(&'a [Paper]),
  /// A completed action
  Success(&'a str),
  /// Neutral information
  Info(&'a str),
  /// Something went wrong but the command carries on
  Warning(&'a str),
}

/// How commands talk to the user.
pub trait UserInteraction {
  /// Asks a yes/no question.
  fn confirm(&self, message: &str) -> Result<bool>;
  /// Shows `content`.
  fn reply(&self, content: ResponseContent) -> Result<()>;
}

/// Interaction on the process's terminal.
///
/// Listings go to stdout, as text trees or as JSON. Messages go to stdout in text mode and to
/// stderr in JSON mode, so that stdout stays parseable.
pub struct Terminal {
  /// Print listings as JSON
  json:            bool,
  /// Answer every prompt with "yes" without asking
  accept_defaults: bool,
}

impl Terminal {
  /// Creates a terminal interaction.
  pub fn new(json: bool, accept_defaults: bool) -> Self { Self { json, accept_defaults } }

  /// Prints a tree of `(title, detail)` rows under a heading.
  fn tree(&self, heading: &str, rows: Vec<(String, String)>) {
    println!("{} {}", style(INFO_PREFIX).cyan(), style(heading).bold());
    let last = rows.len().saturating_sub(1);
    for (i, (title, detail)) in rows.into_iter().enumerate() {
      let (branch, continuation) =
        if i == last { (LAST_ITEM_PREFIX, BLANK_PREFIX) } else { (ITEM_PREFIX, CONTINUE_PREFIX) };
      println!("{} {}", style(branch).dim(), style(title).white());
      println!("{}{}", style(continuation).dim(), style(detail).blue());
    }
  }

  /// Prints a one-line message.
  fn message(&self, prefix: console::StyledObject<&str>, text: &str) {
    if self.json {
      eprintln!("{prefix}{text}");
    } else {
      println!("{prefix}{text}");
    }
  }
}

impl UserInteraction for Terminal {
  fn confirm(&self, message: &str) -> Result<bool> {
    if self.accept_defaults {
      trace!("Accepting default for prompt: {message}");
      return Ok(true);
    }
    Ok(Confirm::new().with_prompt(message).default(false).interact()?)
  }

  fn reply(&self, content: ResponseContent) -> Result<()> {
    if self.json {
      let json = match content {
        ResponseContent::Venues(venues) => Some(serde_json::to_string_pretty(venues)?),
        ResponseContent::Events(events) => Some(serde_json::to_string_pretty(events)?),
        ResponseContent::Anthologies(anthologies) => Some(serde_json::to_string_pretty(anthologies)?),
        ResponseContent::Papers(papers) => Some(serde_json::to_string_pretty(papers)?),
        _ => None,
      };
      if let Some(json) = json {
        println!("{json}");
        return Ok(());
      }
    }

    match content {
      ResponseContent::Venues(venues) => self.tree(
        &format!("{} venues", venues.len()),
        venues.iter().map(|v| (v.name().to_owned(), v.url().to_owned())).collect(),
      ),
      ResponseContent::Events(events) => self.tree(
        &format!("{} events", events.len()),
        events.iter().map(|e| (format!("{} {}", e.venue(), e.year()), e.url().to_owned())).collect(),
      ),
      ResponseContent::Anthologies(anthologies) => self.tree(
        &format!("{} anthologies", anthologies.len()),
        anthologies
          .iter()
          .map(|a| (format!("{} ({} papers)", a.name(), a.paper_count()), a.id().to_owned()))
          .collect(),
      ),
      ResponseContent::Papers(papers) => self.tree(
        &format!("{} papers", papers.len()),
        papers
          .iter()
          .map(|p| {
            let detail = match p.code() {
              Some(code) => format!("{}  code: {code}", p.url()),
              None => p.url().to_owned(),
            };
            (p.name().to_owned(), detail)
          })
          .collect(),
      ),
      ResponseContent::Success(text) => self.message(style(SUCCESS_PREFIX).green(), text),
      ResponseContent::Info(text) => self.message(style(INFO_PREFIX).cyan(), text),
      ResponseContent::Warning(text) => self.message(style(WARNING_PREFIX).yellow(), text),
    }
    Ok(())
  }
}
