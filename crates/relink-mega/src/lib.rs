#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod client;
pub mod error;
pub mod http;
pub mod keys;
pub mod link;

// Re-export the public surface of the adapter
pub use client::MegaClient;
pub use error::{MegaError, MegaResult};
pub use keys::{KeyMaterial, decode_key, decrypt_attributes};
pub use link::{ShareReference, parse};
