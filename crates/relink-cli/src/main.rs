//! CLI entry point - the composition root.
//!
//! Loads settings, bootstraps the stores, and dispatches to handlers.

use clap::Parser;

use relink_cli::{Cli, Commands, bootstrap, handlers};
use relink_core::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Bootstrap the CLI context (composition root)
    let settings = Settings::from_env()?;
    let ctx = bootstrap(settings).await?;

    match cli.command {
        Commands::Convert {
            share_url,
            operator,
        } => {
            handlers::convert::execute(&ctx, &share_url, operator).await?;
        }
        Commands::Admin { command } => {
            handlers::admin::execute(&ctx, command).await?;
        }
        Commands::Stats => {
            handlers::stats::execute(&ctx).await?;
        }
        Commands::Serve { port } => {
            handlers::serve::execute(&ctx, port).await?;
        }
    }

    Ok(())
}
