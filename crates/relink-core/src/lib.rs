#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod auth;
pub mod convert;
pub mod ports;
pub mod settings;

// Re-export commonly used types for convenience
pub use auth::{AuthDecision, DENIED_MESSAGE, authorize};
pub use convert::{
    ConversionOutcome, ConvertError, ConvertEvent, ConvertResult, ConvertStage, ErrorKind,
};
pub use ports::{
    ConvertEventSink, NoopEventSink, NoopOutcomeSink, OutcomeSink, ResolvedDownload,
    SourceResolver, UploadReceipt, Uploader,
};
pub use settings::{
    DEFAULT_DOWNLOAD_TIMEOUT_SECS, DEFAULT_GOFILE_API_BASE, DEFAULT_MEGA_API_BASE,
    DEFAULT_PANEL_PORT, DEFAULT_RESOLVE_TIMEOUT_SECS, Settings, SettingsError,
};

// Silence unused dev-dependency warnings until we add mock-based tests
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tokio_test as _;
