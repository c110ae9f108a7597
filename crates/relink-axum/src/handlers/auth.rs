//! Login and logout handlers.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};

use crate::auth::bearer_token;
use crate::error::HttpError;
use crate::state::AppState;

/// Login request body.
#[derive(Deserialize)]
pub struct LoginRequest {
    /// The panel password.
    pub password: String,
}

/// Login reply: the bearer token for subsequent requests.
#[derive(Serialize)]
pub struct LoginResponse {
    /// Token to present as `Authorization: Bearer <token>`.
    pub token: String,
}

/// Exchange the panel password for a session token.
///
/// Throttled: past five attempts per minute every request gets 429,
/// right password or not.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    if !state.login_throttle.allow() {
        return Err(HttpError::TooManyRequests(
            "too many login attempts, slow down".to_string(),
        ));
    }
    if req.password != state.password {
        tracing::warn!(target: "relink.panel", "failed login attempt");
        return Err(HttpError::Unauthorized("invalid password".to_string()));
    }

    let token = state.sessions.issue();
    tracing::info!(target: "relink.panel", "panel session opened");
    Ok(Json(LoginResponse { token }))
}

/// Invalidate the presented session token.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Json<serde_json::Value> {
    if let Some(token) = bearer_token(&headers) {
        state.sessions.revoke(token);
    }
    Json(serde_json::json!({"logged_out": true}))
}
