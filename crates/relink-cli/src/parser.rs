//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the share-link conversion tool.
#[derive(Parser)]
#[command(name = "relink")]
#[command(about = "Convert mega.nz share links into gofile.io links")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}
