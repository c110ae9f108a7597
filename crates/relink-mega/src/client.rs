//! Mega control-API client.
//!
//! Speaks the one request the pipeline needs: "get download info" for a
//! file id. The wire shape is bit-exact: a POST of
//! `[{"a":"g","g":"1","p":"<file_id>"}]` to the `cs` endpoint, answered
//! by a JSON array of length 1 whose element is either an object with a
//! byte-serving URL (`"g"`) and size (`"s"`), or a bare negative integer
//! sentinel.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};
use url::Url;

use relink_core::{ConvertResult, ResolvedDownload, SourceResolver};

use crate::error::{MegaError, MegaResult};
use crate::http::{HttpBackend, ReqwestBackend};

/// Client for the Mega control endpoint.
///
/// Resolutions are never cached: each call issues exactly one request and
/// the returned URL is valid for one download attempt only.
pub struct MegaClient {
    backend: Arc<dyn HttpBackend>,
    api_base: Url,
}

impl MegaClient {
    /// Create a client against `api_base` with a bounded request timeout.
    pub fn new(api_base: &str, timeout: Duration) -> MegaResult<Self> {
        Ok(Self {
            backend: Arc::new(ReqwestBackend::new(timeout)),
            api_base: Url::parse(api_base)?,
        })
    }

    /// Create a client with an injected backend (tests).
    pub fn with_backend(api_base: &str, backend: Arc<dyn HttpBackend>) -> MegaResult<Self> {
        Ok(Self {
            backend,
            api_base: Url::parse(api_base)?,
        })
    }

    /// Build the `cs` endpoint URL for one file id.
    fn control_url(&self, file_id: &str) -> Url {
        let mut url = self.api_base.clone();
        let base_path = url.path().trim_end_matches('/');
        url.set_path(&format!("{base_path}/cs"));
        url.set_query(Some(&format!("id=1&n={file_id}")));
        url
    }

    /// Ask the host for download info on `file_id`.
    async fn get_download_info(&self, file_id: &str) -> MegaResult<ResolvedDownload> {
        let url = self.control_url(file_id);
        let payload = json!([{"a": "g", "g": "1", "p": file_id}]);

        let reply = self.backend.post_json(&url, &payload).await?;
        let entry = reply
            .as_array()
            .and_then(|a| a.first())
            .ok_or_else(|| MegaError::UnexpectedResponse {
                message: "reply is not a one-element array".to_string(),
            })?;

        // A bare negative integer is the host's rejection verdict.
        if let Some(code) = entry.as_i64() {
            return Err(MegaError::HostRejected { code });
        }

        let Some(ephemeral_url) = entry.get("g").and_then(Value::as_str) else {
            // Object reply without a URL field: the host refused without a
            // sentinel, so report its generic error code.
            tracing::warn!(
                target: "relink.mega",
                file_id,
                body = %entry,
                "download-info reply carries no URL field"
            );
            return Err(MegaError::HostRejected { code: -1 });
        };

        // Declared size is informational only; the downloader never
        // validates against it.
        let declared_size = entry.get("s").and_then(Value::as_u64).unwrap_or(0);

        tracing::debug!(
            target: "relink.mega",
            file_id,
            declared_size,
            "resolved download URL"
        );

        Ok(ResolvedDownload {
            ephemeral_url: ephemeral_url.to_string(),
            declared_size,
        })
    }
}

#[async_trait]
impl SourceResolver for MegaClient {
    async fn resolve(&self, file_id: &str) -> ConvertResult<ResolvedDownload> {
        self.get_download_info(file_id).await.map_err(Into::into)
    }
}
