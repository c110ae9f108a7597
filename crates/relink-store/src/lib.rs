#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod admin;
pub mod error;
mod fs;
pub mod outcome;
pub mod stats;

// Re-export the public surface of the crate
pub use admin::AdminStore;
pub use error::{StoreError, StoreResult};
pub use outcome::StatsOutcomeSink;
pub use stats::{StatsSnapshot, StatsStore};
