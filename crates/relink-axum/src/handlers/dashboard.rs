//! Dashboard handler: one payload with everything the panel shows.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use relink_store::StatsSnapshot;

use crate::error::HttpError;
use crate::state::AppState;

/// Aggregated panel view.
#[derive(Serialize)]
pub struct DashboardResponse {
    /// Conversion counters and uptime.
    pub stats: StatsSnapshot,
    /// Current admin ids, sorted.
    pub admins: Vec<u64>,
}

/// Stats snapshot plus the admin list in one round trip.
pub async fn get(State(state): State<AppState>) -> Result<Json<DashboardResponse>, HttpError> {
    Ok(Json(DashboardResponse {
        stats: state.stats.snapshot().await,
        admins: state.admins.list().await?,
    }))
}
