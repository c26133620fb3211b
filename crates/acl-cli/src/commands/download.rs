//! Module for downloading an anthology's PDFs.

use super::*;

/// Options for [`Commands::Download`]
#[derive(Args, Clone, Debug)]
pub struct DownloadOptions {
  /// Venue name, e.g. "ACL"
  pub venue: String,

  /// Year of the event
  pub year: u32,

  /// Anthology id, e.g. "2023acl-demo"
  pub anthology: String,

  /// Target directory. Defaults to the configured download directory joined with the anthology
  /// id.
  #[arg(long, short)]
  pub dir: Option<PathBuf>,

  /// Only download the paper with this id, e.g. "2023.acl-demo.1"
  #[arg(long, short)]
  pub paper: Option<String>,
}

/// Function for the [`Commands::Download`] in the CLI.
///
/// Papers are downloaded one after the other. A paper that fails is reported and skipped; an
/// existing file is only replaced after confirmation.
pub async fn download(
  interaction: &impl UserInteraction,
  client: &Client,
  config: &Config,
  options: DownloadOptions,
) -> Result<()> {
  let anthology = find_anthology(client, &options.venue, options.year, &options.anthology).await?;
  let mut papers = anthology.get_papers().await?;
  if let Some(id) = &options.paper {
    papers.retain(|paper| paper.id() == id);
    if papers.is_empty() {
      return Err(AclCliError::NotFound(format!("No paper {id} in {}", anthology.id())));
    }
  }

  let dir = options.dir.unwrap_or_else(|| config.download_dir.join(anthology.id()));
  interaction.reply(ResponseContent::Info(&format!(
    "Downloading {} papers to {}",
    papers.len(),
    dir.display()
  )))?;

  let mut downloaded = 0;
  for paper in &papers {
    let target = dir.join(paper.filename());
    if target.exists()
      && !interaction.confirm(&format!("{} exists. Overwrite it?", target.display()))?
    {
      debug!("Keeping {}", target.display());
      continue;
    }
    match paper.download(&dir).await {
      Ok(path) => {
        downloaded += 1;
        trace!("Saved {} to {}", paper.id(), path.display());
      },
      Err(e) => interaction
        .reply(ResponseContent::Warning(&format!("Could not download {}: {e}", paper.id())))?,
    }
  }

  interaction.reply(ResponseContent::Success(&format!(
    "Downloaded {downloaded} of {} papers",
    papers.len()
  )))
}
