//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the conversion pipeline expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` or filesystem types in any signature
//! - Errors cross the boundary as the core taxonomy (`ConvertError`)
//! - Sinks are fire-and-forget: they never fail the attempt

pub mod event_sink;
pub mod outcome_sink;
pub mod source;
pub mod uploader;

// Re-export port traits for convenience
pub use event_sink::{ConvertEventSink, NoopEventSink};
pub use outcome_sink::{NoopOutcomeSink, OutcomeSink};
pub use source::{ResolvedDownload, SourceResolver};
pub use uploader::{UploadReceipt, Uploader};
