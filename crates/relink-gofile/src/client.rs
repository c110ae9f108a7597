//! GoFile upload client.
//!
//! Flow: `GET <api_base>/servers` names the upload servers; the client
//! takes the first one and POSTs the file to
//! `https://<server>.gofile.io/uploadFile`. An accepted file comes back
//! with `status == "ok"` and a `data` object carrying the download page
//! and content code.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use relink_core::{ConvertResult, UploadReceipt, Uploader};

use crate::error::{GofileError, GofileResult};
use crate::http::{GofileBackend, ReqwestBackend};

/// Client for anonymous GoFile uploads.
pub struct GofileClient {
    backend: Arc<dyn GofileBackend>,
    api_base: Url,
}

impl GofileClient {
    /// Create a client against `api_base`.
    pub fn new(api_base: &str) -> GofileResult<Self> {
        Ok(Self {
            backend: Arc::new(ReqwestBackend::new()),
            api_base: Url::parse(api_base)?,
        })
    }

    /// Create a client with an injected backend (tests).
    pub fn with_backend(api_base: &str, backend: Arc<dyn GofileBackend>) -> GofileResult<Self> {
        Ok(Self {
            backend,
            api_base: Url::parse(api_base)?,
        })
    }

    /// Ask the host which server should receive the upload.
    async fn pick_server(&self) -> GofileResult<String> {
        let mut url = self.api_base.clone();
        let base_path = url.path().trim_end_matches('/');
        url.set_path(&format!("{base_path}/servers"));

        let reply = self.backend.get_json(&url).await?;
        ensure_ok_status(&reply)?;

        let server = reply
            .pointer("/data/servers/0/name")
            .and_then(Value::as_str)
            .ok_or_else(|| GofileError::UnexpectedResponse {
                message: "server list is missing or empty".to_string(),
            })?;

        Ok(server.to_string())
    }

    /// Upload `local_path` and return the host's receipt.
    async fn upload_file(&self, local_path: &Path) -> GofileResult<UploadReceipt> {
        let server = self.pick_server().await?;
        let url = Url::parse(&format!("https://{server}.gofile.io/uploadFile"))?;

        tracing::debug!(
            target: "relink.gofile",
            server = %server,
            path = %local_path.display(),
            "uploading file"
        );

        let reply = self.backend.post_file(&url, local_path).await?;
        ensure_ok_status(&reply)?;

        let download_page_url = reply
            .pointer("/data/downloadPage")
            .and_then(Value::as_str)
            .ok_or_else(|| GofileError::UnexpectedResponse {
                message: "reply carries no downloadPage".to_string(),
            })?;
        let content_id = reply
            .pointer("/data/code")
            .and_then(Value::as_str)
            .ok_or_else(|| GofileError::UnexpectedResponse {
                message: "reply carries no content code".to_string(),
            })?;

        Ok(UploadReceipt {
            download_page_url: download_page_url.to_string(),
            content_id: content_id.to_string(),
        })
    }
}

/// Check a reply's `status` field, turning anything but `"ok"` into the
/// host's own message.
fn ensure_ok_status(reply: &Value) -> GofileResult<()> {
    let status = reply.get("status").and_then(Value::as_str);
    if status == Some("ok") {
        return Ok(());
    }
    Err(GofileError::Rejected {
        message: reply
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("unknown error")
            .to_string(),
    })
}

/// Canonical content URL for an uploaded file.
#[must_use]
pub fn content_url(content_id: &str) -> String {
    format!("https://gofile.io/d/{content_id}")
}

#[async_trait]
impl Uploader for GofileClient {
    async fn upload(&self, local_path: &Path) -> ConvertResult<UploadReceipt> {
        self.upload_file(local_path).await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::FakeBackend;
    use relink_core::ErrorKind;
    use serde_json::json;

    const API_BASE: &str = "https://api.gofile.io";

    fn servers_reply() -> Value {
        json!({"status": "ok", "data": {"servers": [{"name": "store3"}, {"name": "store9"}]}})
    }

    fn upload_reply() -> Value {
        json!({"status": "ok", "data": {
            "downloadPage": "https://gofile.io/d/Ab12Cd",
            "code": "Ab12Cd",
            "parentFolder": "ignored"
        }})
    }

    fn temp_payload() -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("file_1700000000");
        std::fs::write(&path, b"uploaded bytes").unwrap();
        (dir, path)
    }

    #[tokio::test]
    async fn test_upload_picks_first_server_and_posts_there() {
        let backend = Arc::new(
            FakeBackend::default()
                .with_response("/servers", servers_reply())
                .with_response("uploadFile", upload_reply()),
        );
        let client = GofileClient::with_backend(API_BASE, backend.clone()).unwrap();
        let (_dir, path) = temp_payload();

        let receipt = client.upload(&path).await.unwrap();
        assert_eq!(receipt.download_page_url, "https://gofile.io/d/Ab12Cd");
        assert_eq!(receipt.content_id, "Ab12Cd");

        let posted = backend.posted_files.lock().unwrap();
        assert_eq!(posted[0].0, "https://store3.gofile.io/uploadFile");
        assert_eq!(posted[0].1, path);
    }

    #[tokio::test]
    async fn test_empty_server_list_is_an_upload_error() {
        let backend = Arc::new(FakeBackend::default().with_response(
            "/servers",
            json!({"status": "ok", "data": {"servers": []}}),
        ));
        let client = GofileClient::with_backend(API_BASE, backend).unwrap();
        let (_dir, path) = temp_payload();

        let err = client.upload(&path).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Upload);
        assert!(err.user_message().contains("missing or empty"));
    }

    #[tokio::test]
    async fn test_host_rejection_carries_host_message() {
        let backend = Arc::new(
            FakeBackend::default()
                .with_response("/servers", servers_reply())
                .with_response(
                    "uploadFile",
                    json!({"status": "error", "message": "file too large"}),
                ),
        );
        let client = GofileClient::with_backend(API_BASE, backend).unwrap();
        let (_dir, path) = temp_payload();

        let err = client.upload(&path).await.unwrap_err();
        assert!(err.user_message().contains("file too large"));
    }

    #[tokio::test]
    async fn test_rejection_without_message_says_unknown() {
        let backend = Arc::new(
            FakeBackend::default()
                .with_response("/servers", servers_reply())
                .with_response("uploadFile", json!({"status": "error"})),
        );
        let client = GofileClient::with_backend(API_BASE, backend).unwrap();
        let (_dir, path) = temp_payload();

        let err = client.upload(&path).await.unwrap_err();
        assert!(err.user_message().contains("unknown error"));
    }

    #[test]
    fn test_content_url_shape() {
        assert_eq!(content_url("Ab12Cd"), "https://gofile.io/d/Ab12Cd");
    }
}
