//! Module for the "papers" listing.

use super::*;

/// Options for [`Commands::Papers`]
#[derive(Args, Clone, Debug)]
pub struct PapersOptions {
  /// Venue name, e.g. "ACL"
  pub venue: String,

  /// Year of the event
  pub year: u32,

  /// Anthology id as shown by `acl anthologies`, e.g. "2023acl-long"
  pub anthology: String,
}

/// Function for the [`Commands::Papers`] in the CLI.
pub async fn papers(
  interaction: &impl UserInteraction,
  client: &Client,
  options: PapersOptions,
) -> Result<()> {
  let anthology = find_anthology(client, &options.venue, options.year, &options.anthology).await?;
  let papers = anthology.get_papers().await?;
  interaction.reply(ResponseContent::Papers(&papers))
}
