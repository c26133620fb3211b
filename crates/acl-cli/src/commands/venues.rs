//! Module for the "venues" listing.

use super::*;

/// Function for the [`Commands::Venues`] in the CLI.
pub async fn venues(interaction: &impl UserInteraction, client: &Client) -> Result<()> {
  let venues = client.catalog().get_venues().await?;
  debug!("Found {} venues", venues.len());
  interaction.reply(ResponseContent::Venues(&venues))
}
