#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

// Binary-only dependencies, used by main.rs
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod handlers;
pub mod parser;
pub mod progress;

// Re-export primary types for convenient access
pub use bootstrap::{CliContext, bootstrap};
pub use commands::{AdminCommand, Commands};
pub use parser::Cli;
pub use progress::ProgressSink;
