//! Destination-host upload port.

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::convert::ConvertResult;

/// What the destination host handed back for an accepted file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReceipt {
    /// Public download page for the uploaded content.
    pub download_page_url: String,
    /// Host-assigned content identifier.
    pub content_id: String,
}

/// Port for handing a finished local file to the destination host.
///
/// Called exactly once per completed attempt, while the attempt's scoped
/// storage is still alive. Failures map to
/// [`ConvertError::Upload`](crate::ConvertError::Upload).
#[async_trait]
pub trait Uploader: Send + Sync {
    /// Upload the file at `local_path` and return the host's receipt.
    async fn upload(&self, local_path: &Path) -> ConvertResult<UploadReceipt>;
}
