//! Panel server bootstrap - the composition root.
//!
//! The only place where panel infrastructure is wired together: store
//! construction, session state, and the listener itself.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use relink_store::{AdminStore, StatsStore};

use crate::auth::{LoginThrottle, SessionSet};
use crate::routes::create_router;
use crate::state::AppState;

/// Server configuration for the panel.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Path of the admin-list flat file.
    pub admin_file: PathBuf,
    /// Path of the statistics JSON file.
    pub stats_file: PathBuf,
    /// Panel login password. The server refuses to start without one.
    pub password: String,
}

/// Application context for the panel.
pub struct PanelContext {
    /// Admin-list repository.
    pub admins: Arc<AdminStore>,
    /// Statistics repository.
    pub stats: Arc<StatsStore>,
    /// Live bearer tokens.
    pub sessions: SessionSet,
    /// Login attempt window.
    pub login_throttle: LoginThrottle,
    /// The expected login password.
    pub password: String,
}

/// Build the panel context from configuration.
#[must_use]
pub fn bootstrap(config: &ServerConfig) -> PanelContext {
    PanelContext {
        admins: Arc::new(AdminStore::new(&config.admin_file)),
        stats: Arc::new(StatsStore::new(&config.stats_file)),
        sessions: SessionSet::new(),
        login_throttle: LoginThrottle::new(),
        password: config.password.clone(),
    }
}

/// Bootstrap and serve the panel until the process stops.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let state: AppState = Arc::new(bootstrap(&config));
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        target: "relink.panel",
        port = listener.local_addr()?.port(),
        "panel server listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
