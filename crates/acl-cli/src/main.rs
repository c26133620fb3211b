//! Command line interface for the ACL Anthology.
//!
//! This crate provides the `acl` tool, built on the `acl` library. It supports:
//! - Listing the venues of the anthology
//! - Listing a venue's events, optionally within a range of years
//! - Listing or searching the anthologies of an event
//! - Listing and downloading the papers of an anthology
//!
//! # Usage
//!
//! ```bash
//! # List every venue
//! acl venues
//!
//! # ACL events from 2019 to 2021
//! acl events ACL --from 2019 --to 2021
//!
//! # Anthologies of EMNLP 2023 whose name contains "Findings"
//! acl anthologies EMNLP 2023 --search Findings
//!
//! # Papers of one anthology, as JSON
//! acl --json papers ACL 2023 2023acl-long
//!
//! # Download every paper of an anthology
//! acl download ACL 2023 2023acl-demo --dir ./papers
//! ```
//!
//! Verbosity is raised with repeated `-v` flags; `RUST_LOG` overrides it.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::path::PathBuf;

use acl::{
  anthology::Anthology, client::Client, config::Config, error::AclError, event::Event,
  paper::Paper, venue::Venue,
};
use clap::{builder::ArgAction, Args, Parser, Subcommand};
use console::style;
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod error;
pub mod interaction;

use crate::{commands::*, error::*, interaction::*};

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Browse the ACL Anthology and download its papers")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Path to a TOML configuration file. If not specified, the platform-specific default is read
  /// when it exists.
  #[arg(long, short, global = true)]
  config: Option<PathBuf>,

  /// Print listings as JSON instead of text
  #[arg(long, global = true)]
  json: bool,

  /// Skip all prompts and accept defaults (mostly for testing)
  #[arg(long, hide = true, global = true)]
  accept_defaults: bool,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Commands,
}

/// Configures the logging system based on the verbosity level
///
/// # Arguments
///
/// * `verbosity` - Number of times the verbose flag was used
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_target(true)
    .init();
}

/// Entry point for the `acl` CLI application
///
/// Parses arguments, sets up logging, loads the configuration and runs the requested command.
///
/// # Errors
///
/// Returns [`AclCliError`] for invalid arguments, unreadable configuration, network failures,
/// unexpected page structure and file system errors.
#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  let config = match &cli.config {
    Some(path) => Config::from_path(path)?,
    None => Config::load()?,
  };
  debug!("Using config: {config:?}");
  let client = Client::from_config(&config)?;
  let terminal = Terminal::new(cli.json, cli.accept_defaults);

  match cli.command {
    Commands::Venues => venues(&terminal, &client).await,
    Commands::Events(options) => events(&terminal, &client, options).await,
    Commands::Anthologies(options) => anthologies(&terminal, &client, options).await,
    Commands::Papers(options) => papers(&terminal, &client, options).await,
    Commands::Download(options) => download(&terminal, &client, &config, options).await,
  }
}
