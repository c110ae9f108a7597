//! Admin-list handlers.

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;

use crate::error::HttpError;
use crate::state::AppState;

/// Body for adding an admin.
#[derive(Deserialize)]
pub struct AddAdminRequest {
    /// Operator id to allow.
    pub admin_id: u64,
}

/// List the admin ids, sorted.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<u64>>, HttpError> {
    Ok(Json(state.admins.list().await?))
}

/// Add an admin id. Duplicates get 400.
pub async fn add(
    State(state): State<AppState>,
    Json(req): Json<AddAdminRequest>,
) -> Result<Json<Vec<u64>>, HttpError> {
    state.admins.add(req.admin_id).await?;
    Ok(Json(state.admins.list().await?))
}

/// Remove an admin id. Unknown ids get 404.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<u64>>, HttpError> {
    state.admins.remove(id).await?;
    Ok(Json(state.admins.list().await?))
}
