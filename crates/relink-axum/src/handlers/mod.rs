//! Panel request handlers, one module per resource.

pub mod admins;
pub mod auth;
pub mod dashboard;
pub mod stats;
