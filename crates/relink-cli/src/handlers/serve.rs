//! Panel server command handler.

use std::path::PathBuf;

use anyhow::{Context, Result};

use relink_axum::{ServerConfig, start_server};

use crate::bootstrap::CliContext;

/// Start the management panel HTTP server and block until it stops.
pub async fn execute(ctx: &CliContext, port: Option<u16>) -> Result<()> {
    let password = ctx
        .settings
        .panel_password
        .clone()
        .context("panel password not set; set RELINK_PANEL_PASSWORD")?;

    let config = ServerConfig {
        port: port.unwrap_or_else(|| ctx.settings.effective_panel_port()),
        admin_file: PathBuf::from(ctx.settings.effective_admin_file()),
        stats_file: PathBuf::from(ctx.settings.effective_stats_file()),
        password,
    };

    println!("Panel listening on http://127.0.0.1:{}", config.port);
    println!("Press Ctrl+C to stop");

    start_server(config).await
}
