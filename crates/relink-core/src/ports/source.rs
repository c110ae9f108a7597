//! Source-host resolution port.

use async_trait::async_trait;

use crate::convert::ConvertResult;

/// Resolution of a file id into a one-shot download location.
///
/// The URL is host-issued and time-limited: it is valid for the attempt
/// that requested it and must never be cached or reused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedDownload {
    /// Ephemeral byte-serving URL.
    pub ephemeral_url: String,
    /// Payload size the host declared. Informational only; the downloader
    /// does not validate against it.
    pub declared_size: u64,
}

/// Port for resolving a share file id against the source host.
///
/// Implementations issue exactly one control-API request per call: no
/// retries, no caching. A rejection sentinel maps to
/// [`ConvertError::Api`](crate::ConvertError::Api), transport trouble to
/// [`ConvertError::Network`](crate::ConvertError::Network).
#[async_trait]
pub trait SourceResolver: Send + Sync {
    /// Resolve `file_id` into an ephemeral download URL and declared size.
    async fn resolve(&self, file_id: &str) -> ConvertResult<ResolvedDownload>;
}
