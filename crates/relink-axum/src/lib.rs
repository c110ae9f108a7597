#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

// Dev-dependencies are exercised by the integration tests in `tests/`,
// not by the lib's unit-test build; anchor them so the lint is satisfied.
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tower as _;

pub mod auth;
pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export the public surface of the crate
pub use bootstrap::{PanelContext, ServerConfig, bootstrap as build_context, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
