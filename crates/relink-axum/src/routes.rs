//! Route definitions and router construction.

use axum::Router;
use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};

use crate::auth::bearer_token;
use crate::error::HttpError;
use crate::handlers;
use crate::state::AppState;

/// Health check endpoint, unauthenticated.
async fn health_check() -> &'static str {
    "OK"
}

/// Session middleware: every guarded route wants a live bearer token.
async fn require_session(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, HttpError> {
    let token = bearer_token(req.headers())
        .ok_or_else(|| HttpError::Unauthorized("missing bearer token".to_string()))?;
    if !state.sessions.is_valid(token) {
        tracing::warn!(
            target: "relink.panel",
            path = %req.uri().path(),
            "rejected request with unknown session token"
        );
        return Err(HttpError::Unauthorized("invalid session token".to_string()));
    }
    Ok(next.run(req).await)
}

/// Routes that require a session token.
fn guarded_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/logout", post(handlers::auth::logout))
        .route("/dashboard", get(handlers::dashboard::get))
        .route(
            "/admins",
            get(handlers::admins::list).post(handlers::admins::add),
        )
        .route("/admins/:id", delete(handlers::admins::remove))
        .route(
            "/stats",
            get(handlers::stats::get).post(handlers::stats::report),
        )
        .route_layer(middleware::from_fn_with_state(state, require_session))
}

/// Build the panel router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/login", post(handlers::auth::login))
        .merge(guarded_routes(state.clone()));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .layer(cors)
        .with_state(state)
}
