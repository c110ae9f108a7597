//! Main commands enum and primary subcommands.

use clap::Subcommand;

/// Available commands for the share-link conversion tool.
#[derive(Subcommand)]
pub enum Commands {
    /// Convert a share link and print the destination link
    Convert {
        /// The mega.nz share URL to convert
        share_url: String,

        /// Operator id checked against the admin list
        #[arg(long, env = "RELINK_OPERATOR_ID")]
        operator: Option<u64>,
    },

    /// Manage the admin list
    Admin {
        #[command(subcommand)]
        command: AdminCommand,
    },

    /// Show conversion statistics
    Stats,

    /// Run the management panel HTTP server
    Serve {
        /// Port to bind (overrides RELINK_PANEL_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

/// Admin-list maintenance subcommands.
#[derive(Subcommand)]
pub enum AdminCommand {
    /// Add an operator id to the admin list
    Add {
        /// Operator id to add
        admin_id: u64,
    },

    /// Remove an operator id from the admin list
    Remove {
        /// Operator id to remove
        admin_id: u64,
    },

    /// List all admin ids
    List,
}
