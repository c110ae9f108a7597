#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod fetch;
pub mod pipeline;
pub mod session;

// Re-export the public surface of the crate
pub use fetch::{ProgressCallback, StreamDownloader};
pub use pipeline::{ConversionPipeline, PipelineDeps};
pub use session::{DownloadSession, timestamped_file_name};
