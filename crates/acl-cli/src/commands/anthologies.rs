//! Module for the "anthologies" listing and search.

use super::*;

/// Options for [`Commands::Anthologies`]
#[derive(Args, Clone, Debug)]
pub struct AnthologiesOptions {
  /// Venue name, e.g. "EMNLP"
  pub venue: String,

  /// Year of the event
  pub year: u32,

  /// Only list anthologies whose name contains this text (case-sensitive)
  #[arg(long, short)]
  pub search: Option<String>,
}

/// Function for the [`Commands::Anthologies`] in the CLI.
pub async fn anthologies(
  interaction: &impl UserInteraction,
  client: &Client,
  options: AnthologiesOptions,
) -> Result<()> {
  let event = client.event(&options.venue, options.year);
  let anthologies = match &options.search {
    Some(text) => event.search_anthology(text).await?,
    None => event.get_anthologies().await?,
  };
  debug!("Found {} anthologies on {}", anthologies.len(), event.url());
  interaction.reply(ResponseContent::Anthologies(&anthologies))
}
