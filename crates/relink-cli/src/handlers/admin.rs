//! Admin-list command handlers.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::commands::AdminCommand;

/// Dispatch one admin-list subcommand.
pub async fn execute(ctx: &CliContext, command: AdminCommand) -> Result<()> {
    match command {
        AdminCommand::Add { admin_id } => {
            ctx.admins.add(admin_id).await?;
            println!("Added admin {admin_id}.");
        }
        AdminCommand::Remove { admin_id } => {
            ctx.admins.remove(admin_id).await?;
            println!("Removed admin {admin_id}.");
        }
        AdminCommand::List => {
            let ids = ctx.admins.list().await?;
            if ids.is_empty() {
                println!("No admins configured.");
            } else {
                for id in ids {
                    println!("{id}");
                }
            }
        }
    }
    Ok(())
}
