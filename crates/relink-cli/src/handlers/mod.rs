//! Command handlers.
//!
//! Each handler takes the composed [`CliContext`](crate::CliContext)
//! plus its command arguments and owns the terminal output for that
//! command.

pub mod admin;
pub mod convert;
pub mod serve;
pub mod stats;
