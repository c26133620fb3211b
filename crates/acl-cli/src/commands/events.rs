//! Module for the "events" listing.

use std::ops::Bound;

use super::*;

/// Options for [`Commands::Events`]
#[derive(Args, Clone, Debug)]
pub struct EventsOptions {
  /// Venue name as listed by `acl venues`, e.g. "ACL"
  pub venue: String,

  /// Earliest year to include
  #[arg(long)]
  pub from: Option<u32>,

  /// Latest year to include
  #[arg(long)]
  pub to: Option<u32>,
}

impl EventsOptions {
  /// The requested years as range bounds; a missing side is unbounded.
  fn years(&self) -> Result<(Bound<u32>, Bound<u32>)> {
    if let (Some(from), Some(to)) = (self.from, self.to) {
      if from > to {
        return Err(AclCliError::InvalidArgument(format!(
          "--from ({from}) must not be after --to ({to})"
        )));
      }
    }
    let bound = |year: Option<u32>| year.map_or(Bound::Unbounded, Bound::Included);
    Ok((bound(self.from), bound(self.to)))
  }
}

/// Function for the [`Commands::Events`] in the CLI.
pub async fn events(
  interaction: &impl UserInteraction,
  client: &Client,
  options: EventsOptions,
) -> Result<()> {
  let years = options.years()?;
  trace!("Listing events of {} in {years:?}", options.venue);
  let events = client.venue(&options.venue).get_events_in(years).await?;
  if events.is_empty() {
    return interaction
      .reply(ResponseContent::Info(&format!("No events of {} in that range", options.venue)));
  }
  interaction.reply(ResponseContent::Events(&events))
}
