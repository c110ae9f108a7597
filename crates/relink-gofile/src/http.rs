//! HTTP backend abstraction for the GoFile API.
//!
//! Same backend pattern as the source-host client: a small trait the
//! client logic is written against, a reqwest implementation for
//! production, and canned responses for tests. The multipart streaming
//! lives here so the client above it stays pure request/reply logic.

use std::path::Path;

use async_trait::async_trait;
use tokio_util::io::ReaderStream;
use url::Url;

use crate::error::{GofileError, GofileResult};

/// Upload requests get a longer leash than the server-pick call.
const UPLOAD_TIMEOUT_SECS: u64 = 60;
const SERVERS_TIMEOUT_SECS: u64 = 10;

/// Trait for HTTP backends the upload client runs on.
#[async_trait]
pub trait GofileBackend: Send + Sync {
    /// GET a URL and deserialize the JSON reply.
    async fn get_json(&self, url: &Url) -> GofileResult<serde_json::Value>;

    /// POST the file at `local_path` as a multipart form field named
    /// `file` and deserialize the JSON reply.
    async fn post_file(&self, url: &Url, local_path: &Path) -> GofileResult<serde_json::Value>;
}

/// Production backend using reqwest with streamed multipart bodies.
pub struct ReqwestBackend {
    get_client: reqwest::Client,
    upload_client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend.
    #[must_use]
    pub fn new() -> Self {
        let build = |secs| {
            reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(secs))
                .build()
                .expect("failed to create HTTP client")
        };
        Self {
            get_client: build(SERVERS_TIMEOUT_SECS),
            upload_client: build(UPLOAD_TIMEOUT_SECS),
        }
    }
}

impl Default for ReqwestBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GofileBackend for ReqwestBackend {
    async fn get_json(&self, url: &Url) -> GofileResult<serde_json::Value> {
        let response = self.get_client.get(url.as_str()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GofileError::RequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.json().await?)
    }

    async fn post_file(&self, url: &Url, local_path: &Path) -> GofileResult<serde_json::Value> {
        let file = tokio::fs::File::open(local_path).await?;
        let length = file.metadata().await?.len();
        let file_name = local_path
            .file_name()
            .map_or_else(|| "file".to_string(), |n| n.to_string_lossy().into_owned());

        // Stream the file body instead of reading it into memory.
        let body = reqwest::Body::wrap_stream(ReaderStream::new(file));
        let part = reqwest::multipart::Part::stream_with_length(body, length)
            .file_name(file_name)
            .mime_str("application/octet-stream")?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .upload_client
            .post(url.as_str())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GofileError::RequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.json().await?)
    }
}
