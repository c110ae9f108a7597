//! Atomic flat-file persistence.

use std::io::Write;
use std::path::Path;

use crate::error::StoreResult;

/// Write `contents` to `path` through a temp file in the same directory
/// plus a rename, so readers never observe a half-written file.
pub(crate) async fn write_atomic(path: &Path, contents: String) -> StoreResult<()> {
    let path = path.to_path_buf();
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| std::path::PathBuf::from("."), Path::to_path_buf);

    tokio::task::spawn_blocking(move || {
        let mut file = tempfile::NamedTempFile::new_in(parent)?;
        file.write_all(contents.as_bytes())?;
        file.flush()?;
        file.persist(&path).map_err(|e| e.error)?;
        Ok(())
    })
    .await
    .map_err(|e| std::io::Error::other(format!("persist task failed: {e}")))?
}
