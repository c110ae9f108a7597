//! Chunked streaming download into scoped storage.
//!
//! The one place in the system that must scale to large files: the
//! response body flows to disk in fixed-size chunks and is never held in
//! memory as a whole. Read failures are network errors (the reader only
//! fails when the stream does), write failures are I/O errors.

use std::path::PathBuf;
use std::time::Duration;

use futures_util::TryStreamExt;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio_util::io::StreamReader;

use relink_core::{ConvertError, ConvertResult};

use crate::session::DownloadSession;

/// Fixed read-buffer size for the body stream.
const CHUNK_SIZE: usize = 16 * 1024;

/// Progress callback, called with (`bytes_written`, `declared_size`)
/// after each chunk lands on disk.
pub type ProgressCallback = Box<dyn Fn(u64, u64) + Send + Sync>;

/// Streaming downloader for ephemeral byte-serving URLs.
///
/// Holds no per-attempt state; one instance can serve any number of
/// concurrent attempts.
pub struct StreamDownloader {
    client: reqwest::Client,
    work_root: Option<PathBuf>,
}

impl StreamDownloader {
    /// Create a downloader whose whole transfer must finish within
    /// `timeout`.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create HTTP client");
        Self {
            client,
            work_root: None,
        }
    }

    /// Override where scoped directories are created (tests).
    #[must_use]
    pub fn with_work_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.work_root = Some(root.into());
        self
    }

    /// Stream `url` into a fresh [`DownloadSession`].
    ///
    /// On any failure the partially written file and its directory are
    /// already gone by the time the error surfaces, because the session
    /// owning them is dropped here.
    pub async fn download(
        &self,
        url: &str,
        file_name: &str,
        declared_size: u64,
        progress: Option<&ProgressCallback>,
    ) -> ConvertResult<DownloadSession> {
        let mut session = DownloadSession::create(self.work_root.as_deref(), file_name)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ConvertError::network(format!("failed to open byte stream: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConvertError::network_with_status(
                "byte-serving URL refused the request".to_string(),
                status.as_u16(),
            ));
        }

        let stream = response.bytes_stream().map_err(std::io::Error::other);
        let mut reader = StreamReader::new(stream);
        let mut file = tokio::fs::File::create(session.local_path())
            .await
            .map_err(|e| ConvertError::from_io_error(&e))?;

        let mut buf = vec![0u8; CHUNK_SIZE];
        loop {
            let read = reader
                .read(&mut buf)
                .await
                .map_err(|e| ConvertError::network(format!("connection dropped mid-stream: {e}")))?;
            if read == 0 {
                break;
            }

            file.write_all(&buf[..read])
                .await
                .map_err(|e| ConvertError::from_io_error(&e))?;
            session.add_bytes(read as u64);

            if let Some(callback) = progress {
                callback(session.bytes_written(), declared_size);
            }
        }

        file.flush()
            .await
            .map_err(|e| ConvertError::from_io_error(&e))?;

        tracing::debug!(
            target: "relink.transfer",
            bytes_written = session.bytes_written(),
            declared_size,
            "download stream finished"
        );

        Ok(session)
    }
}
