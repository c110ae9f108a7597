//! Conversion domain types: errors, events, and attempt outcomes.
//!
//! Pure data types shared by the pipeline and its adapters. No I/O,
//! networking, or runtime dependencies allowed.
//!
//! - `errors` - the attempt error taxonomy (`ConvertError`, `ErrorKind`)
//! - `events` - stage/progress events (`ConvertEvent`, `ConvertStage`)
//! - `outcome` - terminal attempt record (`ConversionOutcome`)

pub mod errors;
pub mod events;
pub mod outcome;

// Re-export commonly used types
pub use errors::{ConvertError, ConvertResult, ErrorKind};
pub use events::{ConvertEvent, ConvertStage};
pub use outcome::ConversionOutcome;
