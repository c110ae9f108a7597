//! Statistics handlers.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use relink_store::StatsSnapshot;

use crate::error::HttpError;
use crate::state::AppState;

/// Body for a worker outcome report.
#[derive(Deserialize)]
pub struct ReportRequest {
    /// Whether the reported attempt succeeded.
    pub success: bool,
}

/// Current counters plus uptime.
pub async fn get(State(state): State<AppState>) -> Json<StatsSnapshot> {
    Json(state.stats.snapshot().await)
}

/// Record one attempt outcome reported by a remote worker.
pub async fn report(
    State(state): State<AppState>,
    Json(req): Json<ReportRequest>,
) -> Result<Json<StatsSnapshot>, HttpError> {
    state
        .stats
        .record(req.success)
        .await
        .map_err(|e| HttpError::Internal(e.to_string()))?;
    Ok(Json(state.stats.snapshot().await))
}
