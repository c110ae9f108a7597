#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod client;
pub mod error;
pub mod http;

// Re-export the public surface of the adapter
pub use client::{GofileClient, content_url};
pub use error::{GofileError, GofileResult};
