use super::*;

pub mod anthologies;
pub mod download;
pub mod events;
#[cfg(test)]
mod fixtures;
pub mod papers;
pub mod venues;

pub use anthologies::{anthologies, AnthologiesOptions};
pub use download::{download, DownloadOptions};
pub use events::{events, EventsOptions};
pub use papers::{papers, PapersOptions};
pub use venues::venues;

/// Available commands for the CLI
#[derive(Subcommand, Clone)]
pub enum Commands {
  /// List every venue of the anthology
  Venues,

  /// List the events of a venue, in page order
  Events(EventsOptions),

  /// List the anthologies of an event
  Anthologies(AnthologiesOptions),

  /// List the papers of an anthology
  Papers(PapersOptions),

  /// Download the PDFs of an anthology's papers
  Download(DownloadOptions),
}

/// Looks up the anthology `id` of `venue`'s event in `year`.
pub async fn find_anthology(client: &Client, venue: &str, year: u32, id: &str) -> Result<Anthology> {
  let event = client.event(venue, year);
  event
    .get_anthologies()
    .await?
    .into_iter()
    .find(|anthology| anthology.id() == id)
    .ok_or_else(|| AclCliError::NotFound(format!("No anthology {id} in {}", event.name())))
}
