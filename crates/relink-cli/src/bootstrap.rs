//! CLI bootstrap - the composition root.
//!
//! The only place where infrastructure is wired together for the CLI
//! adapter: settings, the admin-list store, and the statistics store.
//! Command handlers receive the composed context and delegate to it.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use relink_core::Settings;
use relink_store::{AdminStore, StatsStore};

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// Effective runtime settings.
    pub settings: Settings,
    /// Admin-list repository.
    pub admins: Arc<AdminStore>,
    /// Statistics repository.
    pub stats: Arc<StatsStore>,
}

/// Bootstrap the CLI application.
///
/// Builds the stores from the configured file paths. When the admin
/// file does not exist yet and an initial admin id is configured, the
/// file is seeded with that id so the first operator can use the tool.
pub async fn bootstrap(settings: Settings) -> Result<CliContext> {
    let admin_path = settings.effective_admin_file().to_string();
    let admins = Arc::new(AdminStore::new(&admin_path));

    if !Path::new(&admin_path).exists() {
        if let Some(id) = settings.initial_admin {
            admins.add(id).await?;
            tracing::info!(
                target: "relink.cli",
                admin_id = id,
                file = %admin_path,
                "seeded admin file with initial operator"
            );
        }
    }

    let stats = Arc::new(StatsStore::new(settings.effective_stats_file()));

    Ok(CliContext {
        settings,
        admins,
        stats,
    })
}
